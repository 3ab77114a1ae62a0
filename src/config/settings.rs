//! Service and loader settings
//!
//! Layered configuration for the provider service and the client loaders:
//! defaults, then a TOML file, then environment variables, then CLI flags.
//! Distinct from the credentials object the service serves.

use serde::{Deserialize, Serialize};
use std::time::Duration;

// Helper functions for serde defaults
fn default_host() -> String {
    "::".to_string()
}

fn default_port() -> u16 {
    8888
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "http://localhost:8888".to_string()
}

fn default_static_resource() -> String {
    "config.json".to_string()
}

fn default_endpoint_path() -> String {
    "/api/get-config".to_string()
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_url_var() -> String {
    "SUPABASE_URL".to_string()
}

fn default_key_var() -> String {
    "SUPABASE_ANON_KEY".to_string()
}

// Duration serialization module
mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Main configuration settings for the config provider
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Server configuration
    #[serde(default)]
    pub server: ServerSettings,
    /// Provider endpoint configuration
    #[serde(default)]
    pub provider: ProviderSettings,
    /// Client loader configuration
    #[serde(default)]
    pub loader: LoaderSettings,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Provider endpoint configuration
///
/// The environment variable names are configurable so a deployment that
/// stores its secrets under different names can still be served; defaults
/// match the Supabase dashboard convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Environment variable holding the project URL
    #[serde(default = "default_url_var")]
    pub url_var: String,
    /// Environment variable holding the anonymous key
    #[serde(default = "default_key_var")]
    pub key_var: String,
}

/// Client loader configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderSettings {
    /// Base URL of the deployment the loaders resolve against
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Static resource path, resolved relative to the base URL
    #[serde(default = "default_static_resource")]
    pub static_resource: String,
    /// Credentials endpoint path
    #[serde(default = "default_endpoint_path")]
    pub endpoint_path: String,
    /// Request timeout for loader fetches
    #[serde(with = "duration_secs", default = "default_request_timeout")]
    pub request_timeout: Duration,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable verbose logging
    #[serde(default)]
    pub verbose: bool,
    /// Enable request/response logging
    #[serde(default = "default_true")]
    pub log_requests: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            url_var: default_url_var(),
            key_var: default_key_var(),
        }
    }
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            static_resource: default_static_resource(),
            endpoint_path: default_endpoint_path(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            verbose: false,
            log_requests: default_true(),
        }
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut settings = Self::default();

        // Load server settings
        if let Ok(host) = std::env::var("SUPACONF_SERVER_HOST") {
            settings.server.host = host;
        }

        if let Ok(port) = std::env::var("SUPACONF_SERVER_PORT") {
            settings.server.port = port
                .parse()
                .map_err(|e| crate::Error::config("port", &format!("Invalid port: {}", e)))?;
        }

        // Load loader settings
        if let Ok(base_url) = std::env::var("SUPACONF_BASE_URL") {
            settings.loader.base_url = base_url;
        }

        // Load logging settings
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            settings.logging.level = level;
        }

        if let Ok(verbose) = std::env::var("VERBOSE") {
            settings.logging.verbose = verbose.parse().unwrap_or(false);
        }

        Ok(settings)
    }

    /// Load settings from configuration file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge settings with environment variable overrides
    pub fn merge_with_env(mut self) -> crate::Result<Self> {
        let env_settings = Self::from_env()?;

        // Merge only non-default values from environment
        if env_settings.server.host != Self::default().server.host {
            self.server.host = env_settings.server.host;
        }

        if env_settings.server.port != Self::default().server.port {
            self.server.port = env_settings.server.port;
        }

        if env_settings.loader.base_url != Self::default().loader.base_url {
            self.loader.base_url = env_settings.loader.base_url;
        }

        if env_settings.logging.level != Self::default().logging.level {
            self.logging.level = env_settings.logging.level;
        }

        if env_settings.logging.verbose {
            self.logging.verbose = true;
        }

        Ok(self)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> crate::Result<()> {
        // Validate server settings
        if self.server.port == 0 {
            return Err(crate::Error::config(
                "port",
                "Invalid server port: cannot be 0",
            ));
        }

        // Validate provider settings
        if self.provider.url_var.is_empty() || self.provider.key_var.is_empty() {
            return Err(crate::Error::config(
                "provider",
                "Environment variable names cannot be empty",
            ));
        }

        // Validate loader settings
        if let Err(e) = url::Url::parse(&self.loader.base_url) {
            return Err(crate::Error::config(
                "base_url",
                &format!("Invalid base URL '{}': {}", self.loader.base_url, e),
            ));
        }

        if self.loader.static_resource.is_empty() {
            return Err(crate::Error::config(
                "static_resource",
                "Static resource path cannot be empty",
            ));
        }

        if !self.loader.endpoint_path.starts_with('/') {
            return Err(crate::Error::config(
                "endpoint_path",
                &format!(
                    "Endpoint path must start with '/': {}",
                    self.loader.endpoint_path
                ),
            ));
        }

        // Validate log level
        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(crate::Error::config(
                    "log_level",
                    &format!("Invalid log level: {}", self.logging.level),
                ));
            }
        }

        Ok(())
    }
}
