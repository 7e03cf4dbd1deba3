//! Error types for API requests and client configuration.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use thiserror::Error;

/// Failure of a single API round trip.
///
/// Callers treat every variant the same way; the split only exists so the
/// logged message says what went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("request failed: {reason}")]
    Transport { reason: String },

    #[error("server responded with {status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("unexpected response body: {reason}")]
    Decode { reason: String },
}

impl RequestError {
    /// Create a transport error.
    pub fn transport(reason: impl ToString) -> Self {
        Self::Transport {
            reason: reason.to_string(),
        }
    }

    /// Create an error for a non-success HTTP status.
    pub fn status(status: u16, status_text: impl Into<String>) -> Self {
        Self::Status {
            status,
            status_text: status_text.into(),
        }
    }

    /// Create a body decoding error.
    pub fn decode(reason: impl ToString) -> Self {
        Self::Decode {
            reason: reason.to_string(),
        }
    }
}

/// Invalid API base URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("base URL '{url}' uses unsupported scheme '{scheme}'")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("base URL '{url}' must not contain a {component}")]
    UnexpectedComponent { url: String, component: &'static str },
}
