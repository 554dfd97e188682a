use std::fmt;

use decompose::CandidatePhrase;
use lexicon::AliasIndex;
use serde::{Deserialize, Serialize};

/// Coverage counts over depth-0 items only. Sub-ingredient detail never
/// inflates or deflates the denominator.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoverageCounts {
    /// Number of top-level (depth-0) label items.
    pub top_level_items: usize,
    /// Depth-0 items where neither the item nor any of its sub-candidates
    /// resolved in either dictionary.
    pub fully_unresolved_items: usize,
}

/// Coverage tier derived from the percentage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Tier::High
        } else if percentage >= 70.0 {
            Tier::Medium
        } else {
            Tier::Low
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::High => "High",
            Tier::Medium => "Medium",
            Tier::Low => "Low",
        };
        f.write_str(label)
    }
}

/// Coverage score for one analysis call. Computed fresh per call, never
/// cached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Score {
    /// Share of top-level items resolved by either dictionary, 0.0–100.0,
    /// rounded to one decimal.
    pub percentage: f64,
    pub tier: Tier,
}

/// Walks the candidate sequence and tallies per-item coverage.
///
/// Relies on the decomposer's ordering invariant: a depth-0 candidate is
/// immediately followed by the candidates derived from its own
/// parentheses, so a group ends where the next depth-0 candidate begins.
pub fn coverage(index: &AliasIndex, candidates: &[CandidatePhrase]) -> CoverageCounts {
    let mut counts = CoverageCounts::default();
    let mut in_group = false;
    let mut group_resolved = false;

    for candidate in candidates {
        let resolved = index.resolve(&candidate.normalized_key).is_some();
        if candidate.origin_depth == 0 {
            if in_group && !group_resolved {
                counts.fully_unresolved_items += 1;
            }
            in_group = true;
            counts.top_level_items += 1;
            group_resolved = resolved;
        } else if in_group {
            group_resolved = group_resolved || resolved;
        }
    }
    if in_group && !group_resolved {
        counts.fully_unresolved_items += 1;
    }

    counts
}

/// Turns coverage counts into a percentage and tier. An empty label is
/// defined as full coverage, not an error.
pub fn score(counts: CoverageCounts) -> Score {
    if counts.top_level_items == 0 {
        return Score {
            percentage: 100.0,
            tier: Tier::High,
        };
    }

    let resolved = counts.top_level_items - counts.fully_unresolved_items;
    let raw = (resolved as f64 / counts.top_level_items as f64) * 100.0;
    let percentage = (raw * 10.0).round() / 10.0;

    Score {
        percentage,
        tier: Tier::from_percentage(percentage),
    }
}
