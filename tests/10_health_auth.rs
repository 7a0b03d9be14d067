mod common;

use std::time::Duration;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use scripture_api::auth::{generate_jwt, Claims};
use serde_json::json;

use common::{get, post, send, test_app, test_app_with_issuer, token_for, TestServer, TEST_SECRET};

#[tokio::test]
async fn health_reports_store_state() {
    let (app, store) = test_app();

    let (status, body) = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");

    store.set_offline(true);
    let (status, body) = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
}

#[tokio::test]
async fn root_describes_service_without_auth() {
    let (app, _) = test_app();
    let (status, body) = send(&app, Method::GET, "/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Scripture API");
}

#[tokio::test]
async fn api_requires_bearer_token() {
    let (app, store) = test_app();

    let (status, body) = send(&app, Method::GET, "/api/notes", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");

    let (status, _) = send(&app, Method::GET, "/api/notes", Some("not-a-jwt"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let foreign = generate_jwt(&Claims::new("intruder", 1).unwrap(), "some-other-secret").unwrap();
    let (status, _) = send(&app, Method::GET, "/api/notes", Some(&foreign), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Rejected before the handler: nothing is written
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/notes",
        None,
        Some(json!({ "bookId": "psa", "chapter": 23, "verse": 1, "content": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(store.note_count(), 0);
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let (app, _) = test_app();
    let mut claims = Claims::new("reader", 1).unwrap();
    claims.exp = chrono::Utc::now().timestamp() - 3600;
    let token = generate_jwt(&claims, TEST_SECRET).unwrap();

    let (status, _) = get(&app, "/api/notes", &token).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn configured_issuer_is_required() {
    let (app, _) = test_app_with_issuer(Some("https://id.example.com"));

    // token_for signs without an `iss` claim
    let (status, body) = get(&app, "/api/notes", &token_for("reader-1")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");

    let mut claims = Claims::new("reader-1", 1).unwrap();
    claims.iss = Some("https://other.example.com".to_string());
    let token = generate_jwt(&claims, TEST_SECRET).unwrap();
    let (status, _) = get(&app, "/api/notes", &token).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    claims.iss = Some("https://id.example.com".to_string());
    let token = generate_jwt(&claims, TEST_SECRET).unwrap();
    let (status, body) = get(&app, "/api/notes", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn callback_creates_profile_from_claims() {
    let (app, _) = test_app();
    let token = token_for("reader-1");

    let (status, body) = get(&app, "/api/auth/user", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());

    let (status, body) = post(&app, "/api/auth/callback", &token, json!(null)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "reader-1");
    assert_eq!(body["email"], "reader-1@example.com");
    assert_eq!(body["firstName"], "Test");

    let (status, body) = get(&app, "/api/auth/user", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "reader-1");
}

#[tokio::test]
async fn store_failures_use_fixed_messages() {
    let (app, store) = test_app();
    let token = token_for("reader-1");
    store.set_offline(true);

    let (status, body) = get(&app, "/api/notes", &token).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Failed to fetch notes", "code": "INTERNAL_SERVER_ERROR" }));

    let (status, body) = get(&app, "/api/auth/user", &token).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to fetch user");
}

#[tokio::test]
async fn binary_serves_health_and_guards_api() -> Result<()> {
    let server = TestServer::spawn_offline()?;
    server.wait_ready(Duration::from_secs(20)).await?;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/health", server.base_url)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::SERVICE_UNAVAILABLE);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "degraded");

    let res = client.get(format!("{}/api/notes", server.base_url)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::UNAUTHORIZED);

    let res = client
        .get(format!("{}/api/notes", server.base_url))
        .bearer_auth(token_for("reader-1"))
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Failed to fetch notes");
    Ok(())
}
