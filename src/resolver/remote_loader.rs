//! Secure configuration loader
//!
//! Resolution for hosted deployments: one GET to the credentials endpoint,
//! response shape validation, and a memoized result. Credentials never
//! appear in static assets; the serverless function is the only source.

use crate::{
    Result,
    config::LoaderSettings,
    resolver::{ConfigSlot, http_client},
    types::{Credentials, ErrorResponse},
};
use reqwest::Client;
use tracing::{error, info};
use url::Url;

/// Loader backed by the serverless credentials endpoint
///
/// # Examples
///
/// ```rust
/// use supabase_config_provider::{SecureLoader, config::LoaderSettings};
///
/// # tokio_test::block_on(async {
/// let loader = SecureLoader::new(&LoaderSettings::default())?;
/// assert!(loader.endpoint().as_str().ends_with("/api/get-config"));
/// # Ok::<(), supabase_config_provider::Error>(())
/// # });
/// ```
#[derive(Debug)]
pub struct SecureLoader {
    /// HTTP client for the endpoint request
    client: Client,
    /// Fully resolved endpoint URL
    endpoint: Url,
    /// Memoized resolution result
    slot: ConfigSlot,
}

impl SecureLoader {
    /// Create a loader from loader settings
    pub fn new(settings: &LoaderSettings) -> Result<Self> {
        let base = Url::parse(&settings.base_url)?;
        let endpoint = base.join(&settings.endpoint_path)?;

        Ok(Self {
            client: http_client(settings.request_timeout)?,
            endpoint,
            slot: ConfigSlot::new(),
        })
    }

    /// URL of the endpoint this loader queries
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Resolve the credentials, or log the failure and return `None`.
    ///
    /// Invalid response data is never cached: a later call re-issues the
    /// request. Only a response that parses and passes
    /// [`Credentials::validate`] fills the slot.
    pub async fn resolve(&self) -> Option<Credentials> {
        if let Some(credentials) = self.slot.get() {
            return Some(credentials.clone());
        }

        let response = match self.client.get(self.endpoint.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Error loading configuration: {}", e);
                if is_loopback_host(&self.endpoint) {
                    error!("Running locally without a functions runtime.");
                    error!("To test locally with functions, run: netlify dev");
                }
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            match response.json::<ErrorResponse>().await {
                Ok(body) => error!(
                    "Server configuration error ({}): {}",
                    status,
                    body.message.unwrap_or(body.error)
                ),
                Err(e) => error!("Server returned {} with unreadable body: {}", status, e),
            }
            return None;
        }

        let credentials: Credentials = match response.json().await {
            Ok(credentials) => credentials,
            Err(e) => {
                error!("Invalid configuration received from server: {}", e);
                return None;
            }
        };

        if let Err(e) = credentials.validate() {
            error!("Invalid configuration received from server: {}", e);
            return None;
        }

        info!("Configuration loaded securely from server");
        self.slot.store(credentials.clone());
        Some(credentials)
    }
}

/// Whether the endpoint host is a loopback name.
///
/// Stands in for the original page-side hostname check: a loopback endpoint
/// that refuses connections almost always means the functions emulator is
/// not running.
fn is_loopback_host(url: &Url) -> bool {
    match url.host() {
        Some(url::Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(url::Host::Ipv4(ip)) => ip.is_loopback(),
        Some(url::Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}
