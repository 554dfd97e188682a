use std::collections::HashSet;

use decompose::CandidatePhrase;
use lexicon::{AliasIndex, Category};
use tracing::debug;

use crate::result::ClassificationResult;

/// Classifies an ordered candidate sequence against the alias index.
///
/// Per candidate the precedence is fixed: FDA dictionary first, then the
/// common-ingredient dictionary, else unresolved. Children of a matched
/// parent are still classified on their own (a sub-ingredient such as
/// "soybean" inside "vegetable oil (soybean)" is separately meaningful),
/// and a phrase only lands in `unresolved` when its key matched nowhere
/// across all depths.
///
/// Deterministic for a given index and candidate sequence; absence of a
/// match is a normal outcome, never an error.
pub fn classify(index: &AliasIndex, candidates: &[CandidatePhrase]) -> ClassificationResult {
    let mut result = ClassificationResult::default();
    let mut matched_keys: HashSet<&str> = HashSet::new();

    for candidate in candidates {
        let key = candidate.normalized_key.as_str();
        if key.is_empty() {
            continue;
        }
        match index.resolve(key) {
            Some((Category::Fda, name)) => {
                result.fda_matches.insert(name.to_string());
                matched_keys.insert(key);
            }
            Some((Category::Common, name)) => {
                result.common_matches.insert(name.to_string());
                matched_keys.insert(key);
            }
            None => {}
        }
    }

    // Second pass: only keys that matched nowhere become unresolved,
    // de-duplicated while keeping first-seen order and original casing.
    let mut seen_unresolved: HashSet<&str> = HashSet::new();
    for candidate in candidates {
        let key = candidate.normalized_key.as_str();
        if key.is_empty() || matched_keys.contains(key) || !seen_unresolved.insert(key) {
            continue;
        }
        result.unresolved.push(candidate.raw_text.clone());
    }

    debug!(
        candidates = candidates.len(),
        fda = result.fda_matches.len(),
        common = result.common_matches.len(),
        unresolved = result.unresolved.len(),
        "classified label candidates"
    );

    result
}
