//! CLI integration tests
//!
//! Run the compiled binary and verify argument handling and the resolve
//! mode exit behavior.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_modes() {
    Command::cargo_bin("supa-config")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains("--static"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("supa-config")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_serve_help() {
    Command::cargo_bin("supa-config")
        .unwrap()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--host"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_serve_rejects_resolve_arguments() {
    Command::cargo_bin("supa-config")
        .unwrap()
        .args(["serve", "--base-url", "https://x.test"])
        .assert()
        .failure();
}

#[test]
fn test_fallback_url_requires_fallback_key() {
    Command::cargo_bin("supa-config")
        .unwrap()
        .args(["--fallback-url", "https://x.test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--fallback-key"));
}

#[test]
fn test_resolve_against_unreachable_deployment_fails() {
    Command::cargo_bin("supa-config")
        .unwrap()
        .args(["--base-url", "http://127.0.0.1:1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not be resolved"));
}

#[test]
fn test_static_resolve_with_injected_fallback_succeeds_offline() {
    Command::cargo_bin("supa-config")
        .unwrap()
        .args([
            "--static",
            "--base-url",
            "http://127.0.0.1:1",
            "--fallback-url",
            "https://x.test",
            "--fallback-key",
            "anon123",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"supabaseUrl\""))
        .stdout(predicate::str::contains("https://x.test"))
        .stdout(predicate::str::contains("anon123"));
}
