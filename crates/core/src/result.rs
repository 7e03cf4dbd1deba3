//! Result type definition and logging combinators.
//!
//! Every user action ends at a boundary where a failed request is logged and
//! otherwise swallowed. [`ResultExt`] keeps that boundary to one call.

use std::fmt::Display;

use crate::error::RequestError;

/// The standard Result type for API operations.
pub type Result<T> = std::result::Result<T, RequestError>;

/// Extension trait for logging failures at an action boundary.
pub trait ResultExt<T> {
    /// Convert to an Option, logging the error (with the action name) if present.
    fn log_failure(self, action: &str) -> Option<T>;
}

impl<T, E: Display> ResultExt<T> for std::result::Result<T, E> {
    fn log_failure(self, action: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!(action, error = %e, "task action failed");
                None
            }
        }
    }
}
