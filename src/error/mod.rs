//! Error types for healops

use thiserror::Error;

/// Main error type for healops
#[derive(Debug, Error)]
pub enum HealError {
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    /// Upstream failure, message already phrased for the caller
    #[error("{0}")]
    Upstream(String),

    #[error("Access denied by upstream: {0}")]
    AccessDenied(String),

    /// Analyzer exited non-zero; carries its stderr verbatim
    #[error("{0}")]
    AnalyzerExecution(String),

    #[error("Failed to launch '{program}': {message}")]
    CommandLaunch { program: String, message: String },

    #[error("Command not allowed: {0}")]
    CommandNotAllowed(String),

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Timeout waiting for {0}")]
    Timeout(String),
}

impl From<serde_json::Error> for HealError {
    fn from(e: serde_json::Error) -> Self {
        HealError::Serialization(e.to_string())
    }
}

impl From<serde_yaml::Error> for HealError {
    fn from(e: serde_yaml::Error) -> Self {
        HealError::Serialization(e.to_string())
    }
}

/// Result type alias for healops
pub type Result<T> = std::result::Result<T, HealError>;
