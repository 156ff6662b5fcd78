//! Error types for gateway calls.

use std::fmt;
use thiserror::Error;

/// Errors raised by the HTTP gateway client.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Client could not be built from config
    #[error("Invalid gateway configuration: {0}")]
    Config(String),

    /// Connection, timeout or body read failure
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Remote side answered with a non-success status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// The single failure kind the composer deals with.
///
/// Network failures and remote rejections collapse into this, carrying
/// whatever human-readable message was available.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestFailed {
    pub message: Option<String>,
}

impl RequestFailed {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            message: (!message.trim().is_empty()).then_some(message),
        }
    }

    pub fn without_message() -> Self {
        Self { message: None }
    }

    /// The failure's message, or `fallback` when it has none.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message.as_deref().unwrap_or(fallback)
    }
}

impl fmt::Display for RequestFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message_or("request failed"))
    }
}

impl std::error::Error for RequestFailed {}

impl From<GatewayError> for RequestFailed {
    fn from(err: GatewayError) -> Self {
        RequestFailed::new(err.to_string())
    }
}
