//! Error types for the record source client.

use thiserror::Error;

/// Raised before any network call when required configuration is absent.
#[derive(Debug, Error)]
#[error("measurement source is not configured: set {missing}")]
pub struct ConfigError {
    /// Comma-separated list of the missing environment variables.
    pub missing: String,
}

/// Failures while talking to the document database.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("request to the measurement database failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("measurement database returned status {0}")]
    Status(u16),
}
