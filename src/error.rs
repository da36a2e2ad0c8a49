//! Error types for the token service.
//!
//! Decoding and verification are total functions and never surface errors;
//! the variants here cover the only fallible paths, configuration loading
//! and payload serialization.

use thiserror::Error;

/// Errors produced by token issuance and service construction.
#[derive(Error, Debug)]
pub enum TokenError {
    /// Payload could not be serialized to JSON.
    #[error("Payload serialization error: {0}")]
    Serialization(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TokenError {
    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        TokenError::Serialization(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        TokenError::Config(msg.into())
    }
}

impl From<serde_json::Error> for TokenError {
    fn from(err: serde_json::Error) -> Self {
        TokenError::Serialization(err.to_string())
    }
}
