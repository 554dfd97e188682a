//! Markdown rendering for classified ingredient labels.
//!
//! The engine reports canonical names in whatever casing the reference
//! data carries; presentation concerns (title-casing, bullet formatting,
//! the fixed section headers) live here, on the rendering side of the
//! boundary.

use classify::{ClassificationResult, Score};

const FDA_HEADER: &str = "## Identified FDA-Regulated Substances";
const COMMON_HEADER: &str = "## Identified Common Food Ingredients";
const UNRESOLVED_HEADER: &str = "## Truly Unidentified Ingredients/Phrases";

/// Renders a full analysis as a markdown document.
pub fn render_markdown(
    label_text: &str,
    classification: &ClassificationResult,
    score: &Score,
) -> String {
    let mut doc = String::new();

    doc.push_str("# Ingredient Label Analysis\n\n");
    if !label_text.trim().is_empty() {
        doc.push_str("> ");
        doc.push_str(label_text.trim());
        doc.push_str("\n\n");
    }
    doc.push_str(&format!(
        "**Data Score:** {:.1}% ({})\n\n",
        score.percentage, score.tier
    ));

    render_section(
        &mut doc,
        FDA_HEADER,
        classification.fda_matches.iter().map(|name| title_case(name)),
    );
    render_section(
        &mut doc,
        COMMON_HEADER,
        classification.common_matches.iter().map(|name| title_case(name)),
    );
    render_section(
        &mut doc,
        UNRESOLVED_HEADER,
        classification.unresolved.iter().map(|raw| title_case(raw)),
    );

    doc
}

fn render_section(doc: &mut String, header: &str, items: impl Iterator<Item = String>) {
    doc.push_str(header);
    doc.push('\n');

    let mut any = false;
    for item in items {
        doc.push_str("- ");
        doc.push_str(&item);
        doc.push('\n');
        any = true;
    }
    if !any {
        doc.push_str("None found.\n");
    }
    doc.push('\n');
}

/// Word-initial title-casing over space-separated words. Characters after
/// the first keep their lowercase form, so "FD&C RED NO. 40" renders as
/// "Fd&c Red No. 40" and "natural flavors" as "Natural Flavors".
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, word) in text.split(' ').enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            for rest in chars {
                out.extend(rest.to_lowercase());
            }
        }
    }
    out
}
