//! Configuration management for the config provider
//!
//! This module handles loading and managing settings for both the provider
//! service and the client loaders.

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::{LoaderSettings, LoggingSettings, ProviderSettings, ServerSettings, Settings};

// Shared by the settings and loader test modules: environment variable
// mutations are process-global, so every env test must hold this lock
#[cfg(test)]
pub(crate) static ENV_TEST_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
