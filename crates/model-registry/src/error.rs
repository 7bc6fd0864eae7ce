//! Error types for registry lookups.

use thiserror::Error;

/// Errors that can occur when resolving registry keys.
#[derive(Error, Debug, PartialEq)]
pub enum RegistryError {
    /// The model name matches no canonical key or alias.
    #[error("invalid NWP model selected: {0}")]
    UnknownModel(String),

    /// The variable name matches no canonical key or alias.
    #[error("invalid analysis variable: {0}")]
    UnknownVariable(String),

    /// No dataset variable name could be matched against the candidates.
    #[error("could not determine data variable for {key}; dataset contains {available:?}")]
    AmbiguousVariable {
        key: String,
        available: Vec<String>,
    },
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
