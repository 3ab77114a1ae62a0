//! Client-side configuration resolution
//!
//! The two loader variants a deployment chooses between:
//!
//! - [`StaticLoader`]: `config.json` relative to the base URL, with an
//!   injected fallback for environments that pre-populate credentials
//! - [`SecureLoader`]: the `/api/get-config` endpoint, with response shape
//!   validation
//!
//! Both memoize the first successful resolution in a [`ConfigSlot`] and
//! convert every failure into a logged `None`. Nothing is cached on failure,
//! so calling `resolve` again retries the full chain.

pub mod remote_loader;
pub mod slot;
pub mod static_loader;

pub use remote_loader::SecureLoader;
pub use slot::ConfigSlot;
pub use static_loader::StaticLoader;

use crate::Result;
use reqwest::Client;
use std::time::Duration;

/// Build the HTTP client shared by both loader variants
pub(crate) fn http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| crate::Error::internal(format!("Failed to create HTTP client: {}", e)))
}
