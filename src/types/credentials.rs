//! Credentials type definition
//!
//! The two-field value needed to address the backend database service.

use serde::{Deserialize, Serialize};

/// Supabase connection credentials
///
/// Both fields are required; a credentials value with an empty field is
/// rejected by [`Credentials::validate`]. Field names on the wire are the
/// camelCase names the frontend expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Base URL of the Supabase project
    #[serde(rename = "supabaseUrl")]
    pub supabase_url: String,

    /// Anonymous (publishable) access key
    #[serde(rename = "supabaseAnonKey")]
    pub supabase_anon_key: String,
}

impl Credentials {
    /// Create a new credentials value
    pub fn new(supabase_url: impl Into<String>, supabase_anon_key: impl Into<String>) -> Self {
        Self {
            supabase_url: supabase_url.into(),
            supabase_anon_key: supabase_anon_key.into(),
        }
    }

    /// Validate that both fields are non-empty
    pub fn validate(&self) -> crate::Result<()> {
        if self.supabase_url.is_empty() {
            return Err(crate::Error::validation(
                "supabaseUrl",
                "must be a non-empty string",
            ));
        }
        if self.supabase_anon_key.is_empty() {
            return Err(crate::Error::validation(
                "supabaseAnonKey",
                "must be a non-empty string",
            ));
        }
        Ok(())
    }

    /// Check validity without the error detail
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
