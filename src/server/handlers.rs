//! HTTP request handlers
//!
//! Implementation of the credentials endpoint for the provider service.

use crate::{
    server::app::AppState,
    types::{Credentials, ErrorResponse},
};
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
};

/// Serve the backend credentials
///
/// GET /api/get-config
///
/// Reads the two configured environment variables on every request and
/// returns them as the credentials body. Non-GET methods get a 405 with a
/// JSON body; a missing or empty variable gets a 500 naming both variables.
#[axum_macros::debug_handler]
pub async fn get_config(State(state): State<AppState>, method: Method) -> Response {
    if method != Method::GET {
        tracing::debug!("Rejecting {} request to credentials endpoint", method);
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(ErrorResponse::new("Method not allowed")),
        )
            .into_response();
    }

    let url_var = &state.settings.provider.url_var;
    let key_var = &state.settings.provider.key_var;

    match (read_secret(url_var), read_secret(key_var)) {
        (Some(supabase_url), Some(supabase_anon_key)) => {
            tracing::debug!("Serving credentials read from {} and {}", url_var, key_var);
            let credentials = Credentials::new(supabase_url, supabase_anon_key);
            (StatusCode::OK, credential_headers(), Json(credentials)).into_response()
        }
        _ => {
            tracing::error!(
                "Credential environment variables not configured: {} and {}",
                url_var,
                key_var
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_message(
                    "Server configuration error",
                    format!(
                        "Environment variables not set. Please configure {} and {}.",
                        url_var, key_var
                    ),
                )),
            )
                .into_response()
        }
    }
}

/// Read one secret from the process environment, treating empty as unset.
///
/// Re-read on every request so rotated secrets take effect without a restart.
fn read_secret(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

/// Headers for the credentials body: readable from any origin, cacheable by none
fn credential_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, OPTIONS"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache, no-store, must-revalidate"),
    );
    headers
}
