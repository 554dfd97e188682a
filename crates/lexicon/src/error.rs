use thiserror::Error;

/// Errors that can occur while building or loading an alias index.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LexiconError {
    /// Both dictionaries came up empty; classifying against a hollow index
    /// would silently report every phrase as unresolved.
    #[error("alias index has no entries in either dictionary")]
    EmptyIndex,
    /// Reference data could not be parsed as JSON of the expected shape.
    #[error("failed to parse reference data: {0}")]
    Parse(#[from] serde_json::Error),
}
