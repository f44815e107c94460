//! End-to-end tests for the HTTP contract.
//!
//! Each test boots the full router against a fresh in-memory SQLite
//! database and drives it in-process with `tower::ServiceExt::oneshot`,
//! so no TCP server or external infrastructure is needed. The journey
//! test threads the captured token and bookmark id from one step's
//! response into the next step's request.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use linkvault::api::{create_router, AppState};
use linkvault::config::Config;
use linkvault::infra::Database;

const TEST_JWT_SECRET: &str = "test-secret-key-for-testing-only-32chars";

/// Boot the application against a fresh in-memory database.
async fn test_app() -> Router {
    let config = Config::new("sqlite::memory:", TEST_JWT_SECRET, 1, "127.0.0.1", 0);
    let db = Arc::new(Database::connect(&config).await);
    create_router(AppState::from_config(db, config))
}

/// Send a request and return the status plus the parsed JSON body
/// (`Value::Null` for empty or non-JSON bodies).
async fn send(
    app: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("failed to build request"),
        None => builder.body(Body::empty()).expect("failed to build request"),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router request failed");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

/// Sign up and sign in a user, returning the bearer token.
async fn signup_and_signin(app: &Router, email: &str, password: &str) -> String {
    let (status, _) = send(
        app,
        "POST",
        "/auth/signup",
        None,
        Some(json!({"email": email, "password": password})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        app,
        "POST",
        "/auth/signin",
        None,
        Some(json!({"email": email, "password": password})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    body["access_token"]
        .as_str()
        .expect("signin response should carry an access token")
        .to_string()
}

// =============================================================================
// Signup
// =============================================================================

#[tokio::test]
async fn signup_rejects_missing_email() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/auth/signup",
        None,
        Some(json!({"password": "123"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn signup_rejects_missing_password() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/auth/signup",
        None,
        Some(json!({"email": "morbanjunior@gmail.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn signup_rejects_empty_body() {
    let app = test_app().await;

    let (status, _) = send(&app, "POST", "/auth/signup", None, Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // No body at all is rejected the same way
    let (status, _) = send(&app, "POST", "/auth/signup", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn signup_rejects_malformed_email() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/auth/signup",
        None,
        Some(json!({"email": "not-an-email", "password": "123"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn signup_creates_user_without_exposing_password() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/auth/signup",
        None,
        Some(json!({"email": "morbanjunior@gmail.com", "password": "123"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "morbanjunior@gmail.com");
    assert!(body["id"].is_string());

    // No password material in any form
    let object = body.as_object().expect("signup response should be an object");
    assert!(!object.contains_key("password"));
    assert!(!object.contains_key("passwordHash"));
    assert!(!object.contains_key("hash"));
}

#[tokio::test]
async fn signup_rejects_duplicate_email() {
    let app = test_app().await;
    let payload = json!({"email": "morbanjunior@gmail.com", "password": "123"});

    let (status, _) = send(&app, "POST", "/auth/signup", None, Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, "POST", "/auth/signup", None, Some(payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

// =============================================================================
// Signin
// =============================================================================

#[tokio::test]
async fn signin_rejects_missing_email() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/auth/signin",
        None,
        Some(json!({"password": "123"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn signin_rejects_missing_password() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/auth/signin",
        None,
        Some(json!({"email": "morbanjunior@gmail.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn signin_rejects_empty_body() {
    let app = test_app().await;

    let (status, _) = send(&app, "POST", "/auth/signin", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn signin_returns_reusable_token() {
    let app = test_app().await;
    let token = signup_and_signin(&app, "morbanjunior@gmail.com", "123").await;

    // The same token authenticates more than one request
    for _ in 0..2 {
        let (status, body) = send(&app, "GET", "/users/me", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], "morbanjunior@gmail.com");
    }
}

#[tokio::test]
async fn signin_rejects_wrong_password() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/auth/signup",
        None,
        Some(json!({"email": "morbanjunior@gmail.com", "password": "123"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        "POST",
        "/auth/signin",
        None,
        Some(json!({"email": "morbanjunior@gmail.com", "password": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn signin_rejects_unknown_email() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/auth/signin",
        None,
        Some(json!({"email": "nobody@example.com", "password": "123"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Token handling
// =============================================================================

#[tokio::test]
async fn protected_routes_reject_missing_token() {
    let app = test_app().await;

    for (method, path) in [
        ("GET", "/users/me"),
        ("PATCH", "/users"),
        ("GET", "/bookmarks"),
        ("POST", "/bookmarks"),
    ] {
        let (status, _) = send(&app, method, path, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", method, path);
    }
}

#[tokio::test]
async fn protected_routes_reject_invalid_token() {
    let app = test_app().await;

    let (status, _) = send(&app, "GET", "/users/me", Some("not-a-jwt"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_routes_reject_malformed_authorization_header() {
    let app = test_app().await;

    let request = Request::builder()
        .method("GET")
        .uri("/users/me")
        .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .expect("failed to build request");

    let response = app.oneshot(request).await.expect("router request failed");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Full journey: signup -> signin -> profile -> bookmark lifecycle
// =============================================================================

#[tokio::test]
async fn full_user_journey() {
    let app = test_app().await;
    let token = signup_and_signin(&app, "morbanjunior@gmail.com", "123").await;

    // Current user resolves from the token
    let (status, body) = send(&app, "GET", "/users/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "morbanjunior@gmail.com");

    // Profile edit echoes the patched fields
    let (status, body) = send(
        &app,
        "PATCH",
        "/users",
        Some(&token),
        Some(json!({"firstName": "Ramon Morban", "email": "ramorban@gmail.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["firstName"], "Ramon Morban");
    assert_eq!(body["email"], "ramorban@gmail.com");

    // A fresh user has no bookmarks
    let (status, body) = send(&app, "GET", "/bookmarks", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    // Create a bookmark and capture its generated id
    let (status, body) = send(
        &app,
        "POST",
        "/bookmarks",
        Some(&token),
        Some(json!({"title": "First Bookmark", "link": "https://wwww.google.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["title"], "First Bookmark");
    assert_eq!(body["link"], "https://wwww.google.com");
    let bookmark_id = body["id"]
        .as_str()
        .expect("created bookmark should carry an id")
        .to_string();

    // The list now holds exactly the created bookmark
    let (status, body) = send(&app, "GET", "/bookmarks", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().expect("bookmark list should be an array");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], bookmark_id.as_str());

    // Fetch by id
    let (status, body) = send(
        &app,
        "GET",
        &format!("/bookmarks/{}", bookmark_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], bookmark_id.as_str());

    // Partial edit echoes the new fields and keeps the link
    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/bookmarks/{}", bookmark_id),
        Some(&token),
        Some(json!({"title": "Ramon Bookmark", "description": "El senor de los anillos"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Ramon Bookmark");
    assert_eq!(body["description"], "El senor de los anillos");
    assert_eq!(body["link"], "https://wwww.google.com");

    // Delete responds 204 with an empty body
    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/bookmarks/{}", bookmark_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    // The list is empty again
    let (status, body) = send(&app, "GET", "/bookmarks", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(0));
}

// =============================================================================
// Bookmark validation and ownership
// =============================================================================

#[tokio::test]
async fn create_bookmark_rejects_missing_fields() {
    let app = test_app().await;
    let token = signup_and_signin(&app, "morbanjunior@gmail.com", "123").await;

    // Missing link
    let (status, _) = send(
        &app,
        "POST",
        "/bookmarks",
        Some(&token),
        Some(json!({"title": "First Bookmark"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Missing title
    let (status, _) = send(
        &app,
        "POST",
        "/bookmarks",
        Some(&token),
        Some(json!({"link": "https://wwww.google.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_bookmark_id_is_not_found() {
    let app = test_app().await;
    let token = signup_and_signin(&app, "morbanjunior@gmail.com", "123").await;

    let missing_id = uuid::Uuid::new_v4();
    let (status, _) = send(
        &app,
        "GET",
        &format!("/bookmarks/{}", missing_id),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bookmarks_are_isolated_between_users() {
    let app = test_app().await;
    let owner_token = signup_and_signin(&app, "owner@example.com", "123").await;
    let other_token = signup_and_signin(&app, "other@example.com", "456").await;

    let (status, body) = send(
        &app,
        "POST",
        "/bookmarks",
        Some(&owner_token),
        Some(json!({"title": "First Bookmark", "link": "https://wwww.google.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let bookmark_id = body["id"].as_str().unwrap().to_string();

    // The other user sees an empty list
    let (status, body) = send(&app, "GET", "/bookmarks", Some(&other_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    // And cannot read, edit, or delete the owner's bookmark
    let path = format!("/bookmarks/{}", bookmark_id);

    let (status, _) = send(&app, "GET", &path, Some(&other_token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "PATCH",
        &path,
        Some(&other_token),
        Some(json!({"title": "Hijacked"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &path, Some(&other_token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The owner's bookmark is untouched
    let (status, body) = send(&app, "GET", &path, Some(&owner_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "First Bookmark");
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_endpoint_reports_database_status() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "healthy");
}
