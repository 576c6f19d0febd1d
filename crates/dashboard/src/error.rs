//! Application error type for the dashboard binary.

use domain::DomainError;
use thiserror::Error;

/// Errors surfaced by the dashboard entry point.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable held a value outside its allowed set.
    #[error("Invalid {var}: {source}")]
    Config {
        var: &'static str,
        #[source]
        source: DomainError,
    },

    #[error("Invalid {var}: expected true or false, got {value:?}")]
    ConfigFlag { var: &'static str, value: String },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Failed to serialize view: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to install metrics recorder: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}

pub type Result<T> = std::result::Result<T, AppError>;
