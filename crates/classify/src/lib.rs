//! Classification and scoring over decomposed label candidates.
//!
//! Candidates arrive from the decomposer already normalized; this crate
//! resolves each one against the read-only [`lexicon::AliasIndex`]
//! (FDA dictionary first, then common ingredients), collapses matches into
//! canonical-name sets, collects the leftovers, and turns per-item
//! coverage into a percentage with a High/Medium/Low tier.
//!
//! Everything here is pure computation over the shared index: no locking,
//! no I/O, safe to run concurrently across threads.

mod classifier;
mod result;
mod score;

pub use crate::classifier::classify;
pub use crate::result::ClassificationResult;
pub use crate::score::{coverage, score, CoverageCounts, Score, Tier};
