//! Supabase Config Provider
//!
//! Credentials distribution for pages backed by Supabase. The crate contains the
//! two client-side configuration loaders and the serverless-style endpoint that
//! together keep database credentials out of static assets.
//!
//! # Components
//!
//! - **Static loader**: reads `config.json` relative to a base URL, falling back
//!   to an injected credentials value (local development deployments)
//! - **Secure loader**: fetches credentials from the `/api/get-config` endpoint
//!   and validates the response shape (hosted deployments)
//! - **Provider service**: an HTTP endpoint that reads `SUPABASE_URL` and
//!   `SUPABASE_ANON_KEY` from its environment and serves them as JSON
//!
//! The loaders share one contract: produce a [`Credentials`] value or log the
//! failure and return `None`. The first successful resolution is memoized for
//! the lifetime of the loader; failures are never cached, so the next call
//! retries the whole chain.
//!
//! # Usage
//!
//! ## Server Mode
//!
//! ```bash
//! supa-config serve --port 8888 --host 0.0.0.0
//! ```
//!
//! ## Resolve Mode
//!
//! ```bash
//! supa-config --base-url "https://taskman.example"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use supabase_config_provider::{SecureLoader, Settings};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let settings = Settings::default();
//! let loader = SecureLoader::new(&settings.loader)?;
//! if let Some(credentials) = loader.resolve().await {
//!     println!("backend at {}", credentials.supabase_url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod resolver;
pub mod server;
pub mod types;
pub mod utils;

pub use config::{ConfigLoader, Settings};
pub use error::{Error, Result};
pub use resolver::{SecureLoader, StaticLoader};
pub use types::{Credentials, ErrorResponse};
