//! Error formatting utilities
//!
//! Renders errors for the diagnostic log channel, walking nested causes so a
//! transport failure shows the underlying connection error.

use crate::Error;
use std::error::Error as StdError;

/// Format error for display
pub fn format_error(error: &Error) -> String {
    let formatted = match error {
        Error::Status { status, url } => {
            format!("configuration source returned HTTP {} for {}", status, url)
        }

        Error::Validation { field, message } => {
            format!("Validation failed for {}: {}", field, message)
        }

        Error::Config { field, message } => {
            format!("Configuration error in {}: {}", field, message)
        }

        // For standard errors, use their Display implementation
        _ => error.to_string(),
    };

    // Walk nested error causes so transport failures surface the root problem
    let mut result = formatted;
    let mut source = error.source();

    while let Some(cause) = source {
        if !result.contains(&cause.to_string()) {
            result = format!("{} (caused by {})", result, cause);
        }
        source = cause.source();
    }

    result
}

/// Format error for logging with structured data
pub fn format_error_for_logging(error: &Error) -> serde_json::Value {
    let mut log_data = serde_json::json!({
        "message": format_error(error),
        "category": error.category(),
    });

    if let Error::Status { status, .. } = error {
        log_data["status"] = serde_json::Value::Number((*status).into());
    }

    log_data
}
