//! Parsers for the two JSON reference datasets.
//!
//! The FDA dump is an array of substance records keyed by the column
//! headings of the upstream export; the common-ingredient list is a flat
//! array of strings. File I/O stays with the caller; these functions only
//! see the JSON text.

use serde::Deserialize;
use tracing::info;

use crate::error::LexiconError;
use crate::index::AliasIndexBuilder;

/// One substance record as exported upstream. Field names follow the
/// export's column headings verbatim.
#[derive(Debug, Deserialize)]
struct FdaSubstanceRecord {
    #[serde(rename = "Substance Name (Heading)")]
    heading: Option<String>,
    #[serde(rename = "Substance", default)]
    substance: Option<String>,
    #[serde(rename = "Other Names", default)]
    other_names: Vec<String>,
}

/// Parses the FDA substance dump and registers every name and alias under
/// the record's heading. Records without a heading are skipped. Returns
/// the number of records registered.
pub fn load_fda_json(
    builder: &mut AliasIndexBuilder,
    json: &str,
) -> Result<usize, LexiconError> {
    let records: Vec<FdaSubstanceRecord> = serde_json::from_str(json)?;
    let total = records.len();

    let mut registered = 0usize;
    for record in records {
        let Some(heading) = record.heading.as_deref().map(str::trim) else {
            continue;
        };
        if heading.is_empty() {
            continue;
        }

        builder.add_fda_alias(heading, heading);
        if let Some(substance) = record.substance.as_deref() {
            builder.add_fda_alias(substance, heading);
        }
        for alias in &record.other_names {
            builder.add_fda_alias(alias, heading);
        }
        registered += 1;
    }

    info!(records = total, registered, "loaded fda substance data");
    Ok(registered)
}

/// Parses the flat common-ingredient list; each name maps to itself as the
/// canonical display name. Returns the number of names registered.
pub fn load_common_json(
    builder: &mut AliasIndexBuilder,
    json: &str,
) -> Result<usize, LexiconError> {
    let names: Vec<String> = serde_json::from_str(json)?;

    let mut registered = 0usize;
    for name in &names {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            continue;
        }
        builder.add_common_alias(trimmed, trimmed);
        registered += 1;
    }

    info!(registered, "loaded common ingredient data");
    Ok(registered)
}
