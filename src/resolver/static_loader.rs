//! Static configuration loader
//!
//! Resolution chain for deployments that ship a gitignored `config.json`
//! next to the page: cached value, then the static resource, then an
//! injected fallback, then a logged failure.

use crate::{
    Result,
    config::LoaderSettings,
    error::format_error,
    resolver::{ConfigSlot, http_client},
    types::Credentials,
};
use reqwest::Client;
use tracing::{debug, error};
use url::Url;

/// Loader backed by a static `config.json` resource
#[derive(Debug)]
pub struct StaticLoader {
    /// HTTP client for the static resource fetch
    client: Client,
    /// Fully resolved URL of the static resource
    config_url: Url,
    /// Injected credentials used when the static resource is unavailable
    fallback: Option<Credentials>,
    /// Memoized resolution result
    slot: ConfigSlot,
}

impl StaticLoader {
    /// Create a loader from loader settings
    pub fn new(settings: &LoaderSettings) -> Result<Self> {
        let base = Url::parse(&settings.base_url)?;
        let config_url = base.join(&settings.static_resource)?;

        Ok(Self {
            client: http_client(settings.request_timeout)?,
            config_url,
            fallback: None,
            slot: ConfigSlot::new(),
        })
    }

    /// Inject fallback credentials checked when the static resource fails.
    ///
    /// Replaces the original deployment's pre-populated page global: the
    /// hosting environment hands the value to the loader up front instead of
    /// the loader reaching for ambient state.
    pub fn with_fallback(mut self, credentials: Credentials) -> Self {
        self.fallback = Some(credentials);
        self
    }

    /// URL of the static resource this loader fetches
    pub fn config_url(&self) -> &Url {
        &self.config_url
    }

    /// Resolve the credentials, or log the failure and return `None`.
    ///
    /// The first success is cached; later calls return it without touching
    /// the network. Failures are not cached.
    pub async fn resolve(&self) -> Option<Credentials> {
        if let Some(credentials) = self.slot.get() {
            return Some(credentials.clone());
        }

        match self.fetch_static().await {
            Ok(credentials) => {
                debug!("Configuration loaded from {}", self.config_url);
                self.slot.store(credentials.clone());
                return Some(credentials);
            }
            Err(e) => {
                error!("Error loading {}: {}", self.config_url, format_error(&e));
            }
        }

        if let Some(credentials) = &self.fallback {
            debug!("Using injected fallback configuration");
            self.slot.store(credentials.clone());
            return Some(credentials.clone());
        }

        error!(
            "No configuration found. Please set up {}",
            self.config_url.path()
        );
        None
    }

    /// Fetch and parse the static resource
    async fn fetch_static(&self) -> Result<Credentials> {
        let response = self.client.get(self.config_url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(crate::Error::status(
                response.status().as_u16(),
                self.config_url.as_str(),
            ));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings(base_url: &str) -> LoaderSettings {
        LoaderSettings {
            base_url: base_url.to_string(),
            ..LoaderSettings::default()
        }
    }

    #[test]
    fn test_static_resource_url_join() {
        let loader = StaticLoader::new(&test_settings("http://localhost:8888")).unwrap();
        assert_eq!(
            loader.config_url().as_str(),
            "http://localhost:8888/config.json"
        );
    }

    #[test]
    fn test_static_resource_url_join_with_path() {
        // Relative resolution against a page directory keeps the directory
        let loader = StaticLoader::new(&test_settings("http://localhost:8888/app/")).unwrap();
        assert_eq!(
            loader.config_url().as_str(),
            "http://localhost:8888/app/config.json"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result = StaticLoader::new(&test_settings("not a url"));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fallback_only_resolution() {
        // Unroutable port: the fetch fails, the injected value wins
        let loader = StaticLoader::new(&test_settings("http://127.0.0.1:1"))
            .unwrap()
            .with_fallback(Credentials::new("https://x.test", "anon123"));

        let resolved = loader.resolve().await;
        assert_eq!(resolved, Some(Credentials::new("https://x.test", "anon123")));
        assert!(loader.slot.is_resolved());
    }

    #[tokio::test]
    async fn test_failure_returns_none_and_caches_nothing() {
        let loader = StaticLoader::new(&test_settings("http://127.0.0.1:1")).unwrap();

        assert_eq!(loader.resolve().await, None);
        assert!(!loader.slot.is_resolved());
    }
}
