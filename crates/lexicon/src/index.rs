use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::LexiconError;

/// Which dictionary an alias belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// FDA-regulated additive substances.
    Fda,
    /// Common food ingredients.
    Common,
}

/// A single alias record: one normalized lookup key mapped to the display
/// name it resolves to. Entries are immutable once the index is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AliasEntry {
    /// Normalized lookup key, unique within its dictionary.
    pub alias_key: String,
    /// Display-ready canonical name for the matched substance.
    pub canonical_name: String,
    /// Dictionary the alias belongs to.
    pub category: Category,
}

/// Incremental builder for an [`AliasIndex`].
///
/// Keys are normalized on the way in with [`normalize::normalize`], so the
/// build side and the query side can never disagree on key shape. Aliases
/// that normalize to the empty string are dropped; a duplicate alias
/// overwrites the earlier entry (last write wins).
#[derive(Debug, Default)]
pub struct AliasIndexBuilder {
    fda: FxHashMap<String, String>,
    common: FxHashMap<String, String>,
}

impl AliasIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an FDA substance alias under its canonical display name.
    pub fn add_fda_alias(&mut self, alias: &str, canonical_name: &str) {
        Self::insert(&mut self.fda, Category::Fda, alias, canonical_name);
    }

    /// Registers a common-ingredient alias under its canonical display name.
    pub fn add_common_alias(&mut self, alias: &str, canonical_name: &str) {
        Self::insert(&mut self.common, Category::Common, alias, canonical_name);
    }

    /// Registers a pre-built [`AliasEntry`] in its category's dictionary.
    pub fn add_entry(&mut self, entry: &AliasEntry) {
        match entry.category {
            Category::Fda => self.add_fda_alias(&entry.alias_key, &entry.canonical_name),
            Category::Common => self.add_common_alias(&entry.alias_key, &entry.canonical_name),
        }
    }

    fn insert(
        map: &mut FxHashMap<String, String>,
        category: Category,
        alias: &str,
        canonical_name: &str,
    ) {
        let key = normalize::normalize(alias);
        if key.is_empty() {
            return;
        }
        if let Some(previous) = map.insert(key.clone(), canonical_name.to_string()) {
            if previous != canonical_name {
                debug!(?category, %key, %previous, now = %canonical_name, "duplicate alias overwritten");
            }
        }
    }

    /// Finalizes the index. An index with no entries in either dictionary
    /// is refused: it would misreport every phrase as unresolved.
    pub fn build(self) -> Result<AliasIndex, LexiconError> {
        if self.fda.is_empty() && self.common.is_empty() {
            return Err(LexiconError::EmptyIndex);
        }
        Ok(AliasIndex {
            fda: self.fda,
            common: self.common,
        })
    }
}

/// Read-only alias dictionaries, built once at startup and shared for the
/// process lifetime. Lookups are O(1) hash probes; the maps are never
/// mutated after [`AliasIndexBuilder::build`], so concurrent readers need
/// no locking.
#[derive(Debug)]
pub struct AliasIndex {
    fda: FxHashMap<String, String>,
    common: FxHashMap<String, String>,
}

impl AliasIndex {
    pub fn builder() -> AliasIndexBuilder {
        AliasIndexBuilder::new()
    }

    /// Exact lookup in the FDA substance dictionary.
    pub fn lookup_fda(&self, key: &str) -> Option<&str> {
        self.fda.get(key).map(String::as_str)
    }

    /// Exact lookup in the common-ingredient dictionary.
    pub fn lookup_common(&self, key: &str) -> Option<&str> {
        self.common.get(key).map(String::as_str)
    }

    /// Resolves a key with the fixed precedence order: FDA first, then
    /// common. A key present in both dictionaries always answers FDA.
    pub fn resolve(&self, key: &str) -> Option<(Category, &str)> {
        if let Some(name) = self.lookup_fda(key) {
            return Some((Category::Fda, name));
        }
        self.lookup_common(key).map(|name| (Category::Common, name))
    }

    /// Number of FDA aliases.
    pub fn fda_len(&self) -> usize {
        self.fda.len()
    }

    /// Number of common-ingredient aliases.
    pub fn common_len(&self) -> usize {
        self.common.len()
    }

    /// Total alias count across both dictionaries.
    pub fn len(&self) -> usize {
        self.fda.len() + self.common.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_index() -> AliasIndex {
        let mut builder = AliasIndex::builder();
        builder.add_fda_alias("Citric Acid", "Citric Acid");
        builder.add_fda_alias("FD&C Red No. 40", "FD&C Red No. 40");
        builder.add_common_alias("Water", "water");
        builder.add_common_alias("sugar", "sugar");
        builder.build().expect("index builds")
    }

    #[test]
    fn lookup_uses_normalized_keys() {
        let index = small_index();
        assert_eq!(index.lookup_fda("citric acid"), Some("Citric Acid"));
        assert_eq!(index.lookup_fda("fd&c red no 40"), Some("FD&C Red No. 40"));
        assert_eq!(index.lookup_common("water"), Some("water"));
        assert_eq!(index.lookup_common("citric acid"), None);
    }

    #[test]
    fn resolve_prefers_fda_on_overlap() {
        let mut builder = AliasIndex::builder();
        builder.add_fda_alias("sugar", "Sucrose");
        builder.add_common_alias("sugar", "sugar");
        let index = builder.build().expect("index builds");

        assert_eq!(index.resolve("sugar"), Some((Category::Fda, "Sucrose")));
    }

    #[test]
    fn duplicate_alias_last_write_wins() {
        let mut builder = AliasIndex::builder();
        builder.add_common_alias("salt", "Salt");
        builder.add_common_alias("SALT", "Sodium Chloride");
        let index = builder.build().expect("index builds");

        assert_eq!(index.lookup_common("salt"), Some("Sodium Chloride"));
        assert_eq!(index.common_len(), 1);
    }

    #[test]
    fn entries_register_into_their_category() {
        let mut builder = AliasIndex::builder();
        builder.add_entry(&AliasEntry {
            alias_key: "allura red ac".to_string(),
            canonical_name: "FD&C Red No. 40".to_string(),
            category: Category::Fda,
        });
        builder.add_entry(&AliasEntry {
            alias_key: "water".to_string(),
            canonical_name: "water".to_string(),
            category: Category::Common,
        });
        let index = builder.build().expect("index builds");

        assert_eq!(index.lookup_fda("allura red ac"), Some("FD&C Red No. 40"));
        assert_eq!(index.lookup_common("water"), Some("water"));
        assert_eq!(index.len(), 2);
        assert!(!index.is_empty());
    }

    #[test]
    fn empty_aliases_are_skipped() {
        let mut builder = AliasIndex::builder();
        builder.add_common_alias("  .  ", "Noise");
        builder.add_common_alias("water", "water");
        let index = builder.build().expect("index builds");

        assert_eq!(index.common_len(), 1);
    }

    #[test]
    fn empty_index_refused() {
        let builder = AliasIndex::builder();
        assert!(matches!(builder.build(), Err(LexiconError::EmptyIndex)));
    }
}
