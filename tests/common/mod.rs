#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use subway_lines::infrastructure::persistence::MemoryLineRepository;
use subway_lines::routes::{app_router, router};
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;
use subway_lines::state::AppState;

/// Application state backed by a fresh in-memory line store.
pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(MemoryLineRepository::new()))
}

/// Routes served in-process, without path normalization.
pub fn make_server() -> TestServer {
    TestServer::new(router(create_test_state())).unwrap()
}

pub async fn create_line(server: &TestServer, name: &str) -> Value {
    let response = server.post("/lines").json(&json!({ "name": name })).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

pub async fn line_names(server: &TestServer) -> Vec<String> {
    let response = server.get("/lines").await;
    response.assert_status_ok();

    response
        .json::<Vec<Value>>()
        .iter()
        .map(|line| line["name"].as_str().unwrap().to_string())
        .collect()
}

/// Full application service, including trailing slash normalization.
pub fn make_app() -> NormalizePath<Router> {
    app_router(create_test_state())
}

/// Sends one request through the full application service.
pub async fn send(
    app: &NormalizePath<Router>,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}
