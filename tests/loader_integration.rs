//! Loader integration tests
//!
//! Exercise both loader variants against a mock HTTP server and verify the
//! resolution chain: source order, shape validation, memoization, and the
//! no-caching-on-failure rule.

use pretty_assertions::assert_eq;
use supabase_config_provider::{
    Credentials, SecureLoader, StaticLoader, config::LoaderSettings,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn loader_settings(base_url: String) -> LoaderSettings {
    LoaderSettings {
        base_url,
        ..LoaderSettings::default()
    }
}

fn valid_body() -> serde_json::Value {
    serde_json::json!({"supabaseUrl": "https://x.test", "supabaseAnonKey": "anon123"})
}

#[tokio::test]
async fn test_secure_loader_resolves_and_memoizes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/get-config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(valid_body()))
        .expect(1)
        .mount(&server)
        .await;

    let loader = SecureLoader::new(&loader_settings(server.uri())).unwrap();

    let first = loader.resolve().await;
    assert_eq!(first, Some(Credentials::new("https://x.test", "anon123")));

    // Second call must come from the cache; the mock's expect(1) verifies
    // no further request is issued
    let second = loader.resolve().await;
    assert_eq!(second, first);
}

#[tokio::test]
async fn test_secure_loader_missing_field_is_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/get-config"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"supabaseUrl": "https://x.test"})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let loader = SecureLoader::new(&loader_settings(server.uri())).unwrap();

    // Both calls fail, and both must reach the network: invalid data never
    // populates the slot
    assert_eq!(loader.resolve().await, None);
    assert_eq!(loader.resolve().await, None);
}

#[tokio::test]
async fn test_secure_loader_rejects_empty_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/get-config"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"supabaseUrl": "https://x.test", "supabaseAnonKey": ""})),
        )
        .mount(&server)
        .await;

    let loader = SecureLoader::new(&loader_settings(server.uri())).unwrap();
    assert_eq!(loader.resolve().await, None);
}

#[tokio::test]
async fn test_secure_loader_handles_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/get-config"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": "Server configuration error",
            "message": "Environment variables not set."
        })))
        .mount(&server)
        .await;

    let loader = SecureLoader::new(&loader_settings(server.uri())).unwrap();
    assert_eq!(loader.resolve().await, None);
}

#[tokio::test]
async fn test_secure_loader_handles_unparseable_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/get-config"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let loader = SecureLoader::new(&loader_settings(server.uri())).unwrap();
    assert_eq!(loader.resolve().await, None);
}

#[tokio::test]
async fn test_secure_loader_retries_after_failure() {
    let server = MockServer::start().await;
    let loader = SecureLoader::new(&loader_settings(server.uri())).unwrap();

    // First a failure response, scoped so it can be replaced
    let failure = Mock::given(method("GET"))
        .and(path("/api/get-config"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": "Server configuration error"
        })))
        .expect(1)
        .mount_as_scoped(&server)
        .await;

    assert_eq!(loader.resolve().await, None);
    drop(failure);

    // Mock replaced: the next resolve re-enters the chain and succeeds
    Mock::given(method("GET"))
        .and(path("/api/get-config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(valid_body()))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(
        loader.resolve().await,
        Some(Credentials::new("https://x.test", "anon123"))
    );
}

#[tokio::test]
async fn test_static_loader_reads_config_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/config.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(valid_body()))
        .expect(1)
        .mount(&server)
        .await;

    let loader = StaticLoader::new(&loader_settings(server.uri())).unwrap();

    let first = loader.resolve().await;
    assert_eq!(first, Some(Credentials::new("https://x.test", "anon123")));

    // Memoized, as with the secure loader
    assert_eq!(loader.resolve().await, first);
}

#[tokio::test]
async fn test_static_loader_404_uses_fallback_and_caches_it() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/config.json"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let fallback = Credentials::new("https://injected.test", "injected-anon");
    let loader = StaticLoader::new(&loader_settings(server.uri()))
        .unwrap()
        .with_fallback(fallback.clone());

    assert_eq!(loader.resolve().await, Some(fallback.clone()));

    // The fallback result is cached too; expect(1) proves the second call
    // does not re-fetch
    assert_eq!(loader.resolve().await, Some(fallback));
}

#[tokio::test]
async fn test_static_loader_404_without_fallback_returns_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/config.json"))
        .respond_with(ResponseTemplate::new(404))
        .expect(2)
        .mount(&server)
        .await;

    let loader = StaticLoader::new(&loader_settings(server.uri())).unwrap();

    // Nothing cached on failure: both calls hit the network
    assert_eq!(loader.resolve().await, None);
    assert_eq!(loader.resolve().await, None);
}

#[tokio::test]
async fn test_static_loader_malformed_json_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/config.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "application/json"))
        .mount(&server)
        .await;

    let fallback = Credentials::new("https://injected.test", "injected-anon");
    let loader = StaticLoader::new(&loader_settings(server.uri()))
        .unwrap()
        .with_fallback(fallback.clone());

    assert_eq!(loader.resolve().await, Some(fallback));
}

#[tokio::test]
async fn test_loaders_tolerate_extra_response_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/get-config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "supabaseUrl": "https://x.test",
            "supabaseAnonKey": "anon123",
            "comment": "ignored"
        })))
        .mount(&server)
        .await;

    let loader = SecureLoader::new(&loader_settings(server.uri())).unwrap();
    assert_eq!(
        loader.resolve().await,
        Some(Credentials::new("https://x.test", "anon123"))
    );
}
