//! Axum application setup
//!
//! Creates and configures the Axum application with routes and middleware.

use crate::config::Settings;
use axum::{Router, routing::any};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Application settings
    pub settings: Arc<Settings>,
}

/// Create the main Axum application with routes and middleware
///
/// The credentials route is registered under the configured endpoint path
/// with [`any`] routing: the handler answers non-GET methods itself so the
/// 405 carries the contract's JSON body.
pub fn create_app(settings: Settings) -> Router {
    let log_requests = settings.logging.log_requests;
    let endpoint_path = settings.loader.endpoint_path.clone();

    let state = AppState {
        settings: Arc::new(settings),
    };

    let mut router = Router::new()
        .route(&endpoint_path, any(super::handlers::get_config))
        .with_state(state);

    if log_requests {
        router = router.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));
    }

    router
}
