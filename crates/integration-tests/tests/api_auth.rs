//! Integration tests for registration and login.
//!
//! These tests require a running boutique server:
//!
//! ```bash
//! cargo run -p boutique-server
//! cargo test -p boutique-integration-tests -- --ignored
//! ```

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

/// Base URL for the API (configurable via environment).
fn base_url() -> String {
    std::env::var("BOUTIQUE_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

/// A fresh 10-digit mobile number so repeated runs don't collide.
fn unique_mobile() -> String {
    let n = Uuid::new_v4().as_u128() % 9_000_000_000;
    format!("9{n:09}")
}

async fn register(client: &Client, name: &str, mobile: &str) -> reqwest::Response {
    client
        .post(format!("{}/api/auth/register", base_url()))
        .json(&json!({"name": name, "mobile": mobile}))
        .send()
        .await
        .expect("register request")
}

#[tokio::test]
#[ignore = "Requires a running boutique server"]
async fn test_register_returns_token_and_public_user() {
    let client = Client::new();
    let mobile = unique_mobile();

    let resp = register(&client, "Asha", &mobile).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["message"], "Registered");
    assert!(body["token"].as_str().is_some_and(|t| t.contains('.')));
    assert_eq!(body["user"]["mobile"], mobile.as_str());
    // The admin flag must not leak through the public projection.
    assert!(body["user"]["isAdmin"].is_null());
}

#[tokio::test]
#[ignore = "Requires a running boutique server"]
async fn test_register_duplicate_mobile_conflicts() {
    let client = Client::new();
    let mobile = unique_mobile();

    assert_eq!(
        register(&client, "Asha", &mobile).await.status(),
        StatusCode::OK
    );

    let resp = register(&client, "Bina", &mobile).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["message"], "Mobile already registered");
}

#[tokio::test]
#[ignore = "Requires a running boutique server"]
async fn test_register_missing_fields_rejected() {
    let client = Client::new();

    let resp = client
        .post(format!("{}/api/auth/register", base_url()))
        .json(&json!({"name": "Asha"}))
        .send()
        .await
        .expect("request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires a running boutique server"]
async fn test_login_unregistered_mobile_not_found() {
    let client = Client::new();

    let resp = client
        .post(format!("{}/api/auth/login", base_url()))
        .json(&json!({"mobile": unique_mobile()}))
        .send()
        .await
        .expect("request");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires a running boutique server"]
async fn test_login_after_register() {
    let client = Client::new();
    let mobile = unique_mobile();

    register(&client, "Asha", &mobile).await;

    let resp = client
        .post(format!("{}/api/auth/login", base_url()))
        .json(&json!({"mobile": mobile}))
        .send()
        .await
        .expect("request");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["message"], "Logged in");
    assert!(body["token"].as_str().is_some());
}
