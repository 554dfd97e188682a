//! labellens: ingredient label analysis.
//!
//! This umbrella crate stitches the pipeline stages together so callers can
//! go from a raw label string to a classified, scored analysis with a
//! single call:
//!
//! decompose → classify (normalize + alias index lookups) → coverage → score
//!
//! ## Index lifecycle
//!
//! The alias index is built once at startup (usually from the two JSON
//! reference datasets via [`build_index`]) and held read-only for the
//! process lifetime. [`install_index`] parks a shared handle in a one-shot
//! global so free-standing call sites can use [`analyze_label`]; callers
//! that manage their own state hold an [`Analyzer`] instead. Analysis
//! itself takes no locks and performs no I/O, so one index can serve any
//! number of concurrent callers once installation happens-before first use.
//!
//! Classifying without a populated index would silently misreport every
//! phrase as unresolved, so a missing index fails fast with
//! [`AnalyzeError::IndexNotInstalled`] instead.

use std::sync::{Arc, OnceLock};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, Level};

pub use classify::{
    classify, coverage, score, ClassificationResult, CoverageCounts, Score, Tier,
};
pub use decompose::{decompose, CandidatePhrase};
pub use lexicon::{
    load_common_json, load_fda_json, AliasEntry, AliasIndex, AliasIndexBuilder, Category,
    LexiconError,
};
pub use normalize::{collapse_whitespace, is_token_char, normalize};
pub use report::render_markdown;

/// Errors surfaced by the engine facade.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnalyzeError {
    /// No alias index has been installed; analysis is refused rather than
    /// silently reporting everything as unresolved.
    #[error("alias index not installed; call install_index() at startup")]
    IndexNotInstalled,
    /// The process-wide index can only be installed once.
    #[error("alias index already installed")]
    IndexAlreadyInstalled,
    /// Building the index from reference data failed.
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}

/// The complete output of one analysis call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelAnalysis {
    pub classification: ClassificationResult,
    pub score: Score,
}

/// Stateless analysis engine over a shared, read-only alias index.
#[derive(Debug, Clone)]
pub struct Analyzer {
    index: Arc<AliasIndex>,
}

impl Analyzer {
    pub fn new(index: Arc<AliasIndex>) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &AliasIndex {
        &self.index
    }

    /// Runs the full pipeline over one label. Deterministic for a given
    /// index and input; never fails. Malformed text degrades to an empty
    /// candidate list and a full-coverage score.
    pub fn analyze(&self, label_text: &str) -> LabelAnalysis {
        let start = Instant::now();
        let span = tracing::span!(Level::INFO, "labellens.analyze");
        let _guard = span.enter();

        let candidates = decompose::decompose(label_text);
        let classification = classify::classify(&self.index, &candidates);
        let counts = classify::coverage(&self.index, &candidates);
        let score = classify::score(counts);

        let elapsed_micros = start.elapsed().as_micros();
        info!(
            candidates = candidates.len(),
            top_level_items = counts.top_level_items,
            fda = classification.fda_matches.len(),
            common = classification.common_matches.len(),
            unresolved = classification.unresolved.len(),
            percentage = score.percentage,
            elapsed_micros,
            "analysis_complete"
        );

        LabelAnalysis {
            classification,
            score,
        }
    }
}

/// Builds an alias index from the two JSON reference datasets.
pub fn build_index(fda_json: &str, common_json: &str) -> Result<AliasIndex, AnalyzeError> {
    let mut builder = AliasIndex::builder();
    load_fda_json(&mut builder, fda_json)?;
    load_common_json(&mut builder, common_json)?;
    Ok(builder.build()?)
}

fn global_index() -> &'static OnceLock<Arc<AliasIndex>> {
    static INDEX: OnceLock<Arc<AliasIndex>> = OnceLock::new();
    &INDEX
}

/// Installs the process-wide alias index. Call exactly once at startup,
/// before any [`analyze_label`] call; later installs are rejected.
pub fn install_index(index: Arc<AliasIndex>) -> Result<(), AnalyzeError> {
    global_index()
        .set(index)
        .map_err(|_| AnalyzeError::IndexAlreadyInstalled)
}

/// Returns a handle to the installed process-wide index.
pub fn installed_index() -> Result<Arc<AliasIndex>, AnalyzeError> {
    global_index()
        .get()
        .cloned()
        .ok_or(AnalyzeError::IndexNotInstalled)
}

/// Analyzes one label against the installed process-wide index.
pub fn analyze_label(label_text: &str) -> Result<LabelAnalysis, AnalyzeError> {
    let index = installed_index()?;
    Ok(Analyzer::new(index).analyze(label_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_analyzer() -> Analyzer {
        let mut builder = AliasIndex::builder();
        builder.add_fda_alias("Citric Acid", "CITRIC ACID");
        builder.add_common_alias("water", "water");
        builder.add_common_alias("sugar", "sugar");
        builder.add_common_alias("soybean", "soybean");
        Analyzer::new(Arc::new(builder.build().expect("fixture index builds")))
    }

    #[test]
    fn analyze_runs_the_full_pipeline() {
        let analyzer = fixture_analyzer();
        let analysis = analyzer.analyze("Water, Sugar, Citric Acid.");

        assert!(analysis.classification.fda_matches.contains("CITRIC ACID"));
        assert!(analysis.classification.common_matches.contains("water"));
        assert!(analysis.classification.unresolved.is_empty());
        assert_eq!(analysis.score.percentage, 100.0);
        assert_eq!(analysis.score.tier, Tier::High);
    }

    #[test]
    fn analyze_tolerates_empty_input() {
        let analyzer = fixture_analyzer();
        let analysis = analyzer.analyze("");

        assert!(analysis.classification.fda_matches.is_empty());
        assert!(analysis.classification.unresolved.is_empty());
        assert_eq!(analysis.score.percentage, 100.0);
        assert_eq!(analysis.score.tier, Tier::High);
    }

    #[test]
    fn build_index_wires_both_loaders() {
        let fda = r#"[{"Substance Name (Heading)": "CITRIC ACID", "Other Names": []}]"#;
        let common = r#"["water"]"#;
        let index = build_index(fda, common).expect("index builds");

        assert_eq!(index.fda_len(), 1);
        assert_eq!(index.common_len(), 1);
    }

    #[test]
    fn build_index_rejects_empty_datasets() {
        let result = build_index("[]", "[]");
        assert!(matches!(
            result,
            Err(AnalyzeError::Lexicon(LexiconError::EmptyIndex))
        ));
    }

    #[test]
    fn analysis_serializes_for_transport() {
        let analyzer = fixture_analyzer();
        let analysis = analyzer.analyze("Water, Mystery Gum");

        let json = serde_json::to_string(&analysis).expect("serializes");
        let back: LabelAnalysis = serde_json::from_str(&json).expect("round-trips");
        assert_eq!(back, analysis);
    }
}
