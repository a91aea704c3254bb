use thiserror::Error;

use ael_lib::SettingsError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Settings file could not be read or written
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog file could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Bad command-line input
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    pub(crate) fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    pub(crate) fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }
}
