//! Alias dictionaries for ingredient classification.
//!
//! This crate owns the two lookup maps the classifier queries: FDA-regulated
//! additive substances (thousands of names, tens of thousands of aliases)
//! and common food ingredients (hundreds of names). Both map a normalized
//! alias key to a canonical display name.
//!
//! ## Lifecycle
//!
//! The index is plain data transformation: feed aliases into an
//! [`AliasIndexBuilder`] (by hand or through the JSON [`loader`]s), call
//! [`AliasIndexBuilder::build`], and hold the resulting [`AliasIndex`]
//! read-only for the rest of the process. There is no mutation or reload
//! path; a new dataset means a new index.
//!
//! Keys are normalized at insert time with the same rules the query side
//! uses, so the contract "pre-normalized by the same normalizer" holds by
//! construction rather than by convention.

mod error;
mod index;
mod loader;

pub use crate::error::LexiconError;
pub use crate::index::{AliasEntry, AliasIndex, AliasIndexBuilder, Category};
pub use crate::loader::{load_common_json, load_fda_json};
