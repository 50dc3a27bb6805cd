// Rust guideline compliant 2026-10-16

//! Error types for the toolbelt library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for toolbelt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for toolbelt operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The update interval of a tracker or reporter was zero.
    #[error("Update interval must be greater than 0")]
    InvalidInterval,

    /// A gauge was started without a positive total.
    #[error("Gauge requires a total greater than 0")]
    MissingTotal,

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A file could not be opened or created.
    #[error("Cannot open {}: {source}", path.display())]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A command-line argument was missing or could not be coerced.
    #[error("Invalid argument '{key}': {reason}")]
    Argument {
        /// Argument id as registered with clap.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Invalid configuration.
    #[error("Invalid config: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn argument(key: &str, reason: impl Into<String>) -> Self {
        Error::Argument {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}
