//! Error types for building spelling alphabets
//!
//! Spelling and lookup never fail. Errors only surface while alphabet
//! definitions are parsed and validated.

use thiserror::Error;

/// Errors raised while constructing a [`SpellingAlphabet`](crate::SpellingAlphabet)
/// or a [`Registry`](crate::Registry).
#[derive(Error, Debug)]
pub enum SpellError {
    #[error("invalid alphabet data: {0}")]
    Data(#[from] serde_json::Error),

    #[error("alphabet locale '{locale}' is not a valid language tag: {reason}")]
    Locale { locale: String, reason: String },

    #[error("alphabet '{locale}' has no symbols")]
    EmptyAlphabet { locale: String },

    #[error("alphabet '{locale}' contains an empty key")]
    EmptyKey { locale: String },

    #[error("alphabet '{locale}' key {key:?} is not in folded form (expected {folded:?})")]
    UnfoldedKey {
        locale: String,
        key: String,
        folded: String,
    },

    #[error("no spelling alphabets defined")]
    EmptyRegistry,

    #[error("default alphabet '{0}' is not defined")]
    MissingDefault(String),

    #[error("alphabet name '{0}' is used more than once")]
    DuplicateName(String),
}

/// Result type alias for alphabet construction
pub type Result<T> = std::result::Result<T, SpellError>;
