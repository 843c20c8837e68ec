//! Error types for codeedit

use thiserror::Error;

/// Result type alias for codeedit operations
pub type Result<T> = std::result::Result<T, EditorError>;

/// Editor error types
///
/// Only configuration-time work (compiling rules, loading themes, languages
/// and settings) can fail. Live editing degrades silently instead.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid pattern for rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    #[error("Unknown color role: {0}")]
    UnknownRole(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("{0}")]
    Message(String),
}
