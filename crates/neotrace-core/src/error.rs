//! Error types for the close-approach database

use thiserror::Error;

/// Result type alias for neotrace operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading source data or exporting results
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed source record
    #[error("Malformed record in '{source_name}': {message}")]
    DataFormat { source_name: String, message: String },

    /// Timestamp that does not match the expected calendar layout
    #[error("Unparseable timestamp '{0}'")]
    Timestamp(String),

    /// Unsupported export format
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a malformed-record error
    pub fn data_format(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DataFormat {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}
