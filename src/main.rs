//! Unified CLI for the Supabase config provider
//!
//! The main binary provides both the provider service and a one-shot
//! resolve mode through a unified command-line interface using subcommands.
//!
//! # Usage
//!
//! ## Server Mode
//! ```bash
//! supa-config serve --port 8888 --host 0.0.0.0
//! ```
//!
//! ## Resolve Mode
//! ```bash
//! supa-config --base-url "https://taskman.example"
//! supa-config --static --base-url "http://localhost:8888"
//! ```
//!
//! ## Help and Version
//! ```bash
//! supa-config --version
//! supa-config --help
//! supa-config serve --help
//! ```

use clap::{Parser, Subcommand};

use supabase_config_provider::{
    cli::{ResolveArgs, ServerArgs, run_resolve_mode, run_server_mode},
    types::Credentials,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "supa-config")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    // Resolve mode options (when no subcommand is provided)
    /// Base URL of the deployment to resolve against
    #[arg(short, long, value_name = "BASE_URL")]
    base_url: Option<String>,

    /// Resolve via the static config.json instead of the secure endpoint
    #[arg(short = 's', long = "static")]
    static_mode: bool,

    /// Fallback Supabase URL injected when the static resource is unavailable
    #[arg(long, value_name = "URL", requires = "fallback_key")]
    fallback_url: Option<String>,

    /// Fallback Supabase anon key injected when the static resource is unavailable
    #[arg(long, value_name = "KEY", requires = "fallback_url")]
    fallback_key: Option<String>,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the provider service
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Configuration file path
        #[arg(long)]
        config: Option<String>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve {
            port,
            host,
            config,
            verbose,
        }) => {
            // Server mode logic
            let args = ServerArgs {
                port,
                host,
                config,
                verbose,
            };
            run_server_mode(args).await
        }
        None => {
            // Resolve mode logic (default when no subcommand)
            let fallback = match (cli.fallback_url, cli.fallback_key) {
                (Some(url), Some(key)) => Some(Credentials::new(url, key)),
                _ => None,
            };
            let args = ResolveArgs {
                base_url: cli.base_url,
                static_mode: cli.static_mode,
                fallback,
                verbose: cli.verbose,
            };
            run_resolve_mode(args).await
        }
    }
}
