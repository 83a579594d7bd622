//! Shared helpers for the HTTP integration tests.
//!
//! Requests go straight into the router through `tower::ServiceExt::oneshot`,
//! with no TCP listener. Storage is the in-memory backend so these tests run
//! without a database.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use backlog_api::auth::jwt::{generate_access_token, JwtConfig};
use backlog_api::config::{ServerConfig, StorageBackend};
use backlog_api::router::build_app_router;
use backlog_api::state::AppState;
use backlog_core::roles::Role;
use backlog_db::storage::Storage;
use chrono::Duration;
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "backlog-test-secret";

/// Build a test `ServerConfig` with safe defaults and in-memory storage.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        storage_backend: StorageBackend::Memory,
        database_url: None,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
        },
    }
}

/// A running app plus the state behind it, so tests can send several
/// requests against the same storage.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

/// Build the full application router over empty in-memory storage.
pub fn build_test_app() -> TestApp {
    let config = test_config();
    let state = AppState {
        storage: Arc::new(Storage::in_memory()),
        config: Arc::new(config.clone()),
    };
    TestApp {
        router: build_app_router(state.clone(), &config),
        state,
    }
}

pub fn token_for(role: Role) -> String {
    generate_access_token(Uuid::new_v4(), role, Duration::hours(1), &test_config().jwt).unwrap()
}

pub fn admin_token() -> String {
    token_for(Role::Admin)
}

pub fn user_token() -> String {
    token_for(Role::User)
}

fn request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn get(app: &TestApp, uri: &str) -> Response<Body> {
    app.send(request(Method::GET, uri, None, None)).await
}

pub async fn get_auth(app: &TestApp, uri: &str, token: &str) -> Response<Body> {
    app.send(request(Method::GET, uri, Some(token), None)).await
}

pub async fn post_json(app: &TestApp, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.send(request(Method::POST, uri, None, Some(body))).await
}

pub async fn post_json_auth(
    app: &TestApp,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    app.send(request(Method::POST, uri, Some(token), Some(body)))
        .await
}

pub async fn post(app: &TestApp, uri: &str) -> Response<Body> {
    app.send(request(Method::POST, uri, None, None)).await
}

pub async fn post_auth(app: &TestApp, uri: &str, token: &str) -> Response<Body> {
    app.send(request(Method::POST, uri, Some(token), None)).await
}

pub async fn put_json(app: &TestApp, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.send(request(Method::PUT, uri, None, Some(body))).await
}

pub async fn put_json_auth(
    app: &TestApp,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    app.send(request(Method::PUT, uri, Some(token), Some(body)))
        .await
}

pub async fn delete(app: &TestApp, uri: &str) -> Response<Body> {
    app.send(request(Method::DELETE, uri, None, None)).await
}

pub async fn delete_auth(app: &TestApp, uri: &str, token: &str) -> Response<Body> {
    app.send(request(Method::DELETE, uri, Some(token), None)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a row through the API as an admin and return its `data` payload.
pub async fn create_as_admin(
    app: &TestApp,
    uri: &str,
    body: serde_json::Value,
) -> serde_json::Value {
    let response = post_json_auth(app, uri, body, &admin_token()).await;
    let json = body_json(response).await;
    assert_eq!(json["status"], "success", "create failed: {json}");
    json["data"].clone()
}
