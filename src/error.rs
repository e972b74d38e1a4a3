use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Configuration error: {0}")]
    #[diagnostic(code(semainier::config))]
    Config(String),

    #[error("Planning store error: {0}")]
    #[diagnostic(code(semainier::store))]
    Store(String),

    #[error(transparent)]
    #[diagnostic(code(semainier::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(semainier::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(semainier::other))]
    Other(String),
}

// Implement From for JSON serialization errors
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type PlanningResult<T> = Result<T, Error>;

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create planning store errors
pub fn store_error(message: &str) -> Error {
    Error::Store(message.to_string())
}
