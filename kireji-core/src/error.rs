//! Error types for dictionary loading and configuration
//!
//! Validation itself never fails: every input string produces a
//! [`HaikuVerdict`](crate::HaikuVerdict). These errors only cover the
//! resources a validator is built from.

use thiserror::Error;

/// Errors raised while preparing a validator
#[derive(Debug, Error)]
pub enum KirejiError {
    /// A dictionary line could not be parsed
    #[error("dictionary line {line}: {reason}")]
    Dictionary {
        /// 1-based line number in the dictionary source
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// The dictionary source held no entries
    #[error("pronunciation dictionary contains no entries")]
    EmptyDictionary,

    /// Reading a dictionary or configuration file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<toml::de::Error> for KirejiError {
    fn from(err: toml::de::Error) -> Self {
        KirejiError::Configuration(err.to_string())
    }
}

/// Result type for loading and configuration
pub type Result<T> = std::result::Result<T, KirejiError>;
