//! Resolve mode CLI logic
//!
//! One-shot resolution against a deployment: runs the selected loader once
//! and prints the credentials as JSON, so an operator can smoke-test a
//! deployment from the terminal.

use crate::{
    Settings,
    config::ConfigLoader,
    resolver::{SecureLoader, StaticLoader},
    types::Credentials,
};
use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Arguments for resolve mode
#[derive(Debug)]
pub struct ResolveArgs {
    pub base_url: Option<String>,
    pub static_mode: bool,
    pub fallback: Option<Credentials>,
    pub verbose: bool,
}

/// Run resolve mode with the given arguments
pub async fn run_resolve_mode(args: ResolveArgs) -> Result<()> {
    // Logging precedence: CLI --verbose > RUST_LOG > default info.
    // Logs go to stderr so the resolved JSON stays alone on stdout.
    let env_filter = if args.verbose {
        EnvFilter::new("debug")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_loader = ConfigLoader::new();
    let mut settings = config_loader
        .load(ConfigLoader::get_config_path().as_deref())
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to load configuration: {}. Using defaults.", e);
            Settings::default()
        });

    if let Some(base_url) = args.base_url {
        settings.loader.base_url = base_url;
    }

    let resolved = if args.static_mode {
        let mut loader = StaticLoader::new(&settings.loader)?;
        if let Some(fallback) = args.fallback {
            loader = loader.with_fallback(fallback);
        }
        tracing::debug!("Resolving via static resource {}", loader.config_url());
        loader.resolve().await
    } else {
        let loader = SecureLoader::new(&settings.loader)?;
        tracing::debug!("Resolving via endpoint {}", loader.endpoint());
        loader.resolve().await
    };

    match resolved {
        Some(credentials) => {
            println!("{}", serde_json::to_string_pretty(&credentials)?);
            Ok(())
        }
        None => anyhow::bail!(
            "configuration could not be resolved from {}",
            settings.loader.base_url
        ),
    }
}
