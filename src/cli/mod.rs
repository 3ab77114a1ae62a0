//! Command-line interface
//!
//! Mode implementations behind the `supa-config` binary: the long-running
//! provider service and the one-shot resolve mode.

pub mod resolve;
pub mod server;

pub use resolve::{ResolveArgs, run_resolve_mode};
pub use server::{ServerArgs, run_server_mode};
