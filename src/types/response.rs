//! Response type definitions
//!
//! Error body returned by the provider endpoint.

use serde::{Deserialize, Serialize};

/// Error response for API errors
///
/// The body shape is part of the endpoint contract: `error` always present,
/// `message` only on responses that carry operator guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error category
    pub error: String,

    /// Optional human-readable guidance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    /// Create an error response with operator guidance
    pub fn with_message(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: Some(message.into()),
        }
    }
}
