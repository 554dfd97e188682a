use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Output of classifying one label's candidate phrases.
///
/// Matches are sets keyed by canonical name: a phrase that recurs at
/// several depths in the same label counts once. `unresolved` keeps the
/// original casing of whatever the label actually said, de-duplicated by
/// normalized key in first-seen order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassificationResult {
    /// Canonical names of matched FDA-regulated substances.
    pub fda_matches: BTreeSet<String>,
    /// Canonical names of matched common ingredients. Never contains a
    /// phrase already claimed by the FDA dictionary.
    pub common_matches: BTreeSet<String>,
    /// Raw phrases whose normalized key matched neither dictionary at any
    /// depth.
    pub unresolved: Vec<String>,
}

impl ClassificationResult {
    /// Total number of distinct matched canonical names.
    pub fn matched_len(&self) -> usize {
        self.fda_matches.len() + self.common_matches.len()
    }
}
