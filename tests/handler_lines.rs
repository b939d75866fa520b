mod common;

use axum::http::{Method, StatusCode};
use serde_json::{Value, json};

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_returns_line_and_location() {
    let server = common::make_server();

    let response = server
        .post("/lines")
        .json(&json!({ "name": "1호선" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.header("location"), "/lines/1");

    let body = response.json::<Value>();
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "1호선");
    assert!(body.get("created_at").is_some());
    assert!(body.get("updated_at").is_some());
}

#[tokio::test]
async fn test_create_accepts_empty_and_duplicate_names() {
    let server = common::make_server();

    common::create_line(&server, "").await;
    common::create_line(&server, "2호선").await;
    common::create_line(&server, "2호선").await;

    assert_eq!(common::line_names(&server).await, vec!["", "2호선", "2호선"]);
}

#[tokio::test]
async fn test_create_rejects_overlong_name() {
    let server = common::make_server();

    let response = server
        .post("/lines")
        .json(&json!({ "name": "a".repeat(256) }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_create_without_name_is_client_error() {
    let server = common::make_server();

    let response = server.post("/lines").json(&json!({})).await;

    assert!(
        response.status_code().is_client_error(),
        "expected client error, got {}",
        response.status_code()
    );
}

// ─── LIST / GET ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_empty() {
    let server = common::make_server();

    let response = server.get("/lines").await;

    response.assert_status_ok();
    assert!(response.json::<Vec<Value>>().is_empty());
}

#[tokio::test]
async fn test_list_is_ordered_by_id() {
    let server = common::make_server();

    for name in ["2호선", "1호선", "3호선"] {
        common::create_line(&server, name).await;
    }

    let items = server.get("/lines").await.json::<Vec<Value>>();
    let ids: Vec<i64> = items.iter().map(|i| i["id"].as_i64().unwrap()).collect();

    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_get_line_by_id() {
    let server = common::make_server();
    let created = common::create_line(&server, "3호선").await;

    let response = server.get(&format!("/lines/{}", created["id"])).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["name"], "3호선");
}

#[tokio::test]
async fn test_get_line_not_found() {
    let server = common::make_server();

    let response = server.get("/lines/999").await;

    response.assert_status_not_found();
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["details"]["id"], 999);
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_returns_renamed_line() {
    let server = common::make_server();
    common::create_line(&server, "4호선").await;

    let response = server
        .put("/lines/1")
        .json(&json!({ "name": "5호선" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "5호선");
}

#[tokio::test]
async fn test_update_not_found() {
    let server = common::make_server();

    let response = server
        .put("/lines/999")
        .json(&json!({ "name": "ghost" }))
        .await;

    response.assert_status_not_found();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_not_found() {
    let server = common::make_server();

    let response = server.delete("/lines/999").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_twice() {
    let server = common::make_server();
    common::create_line(&server, "1호선").await;

    server
        .delete("/lines/1")
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server.delete("/lines/1").await.assert_status_not_found();
}

#[tokio::test]
async fn test_ids_not_reused_after_delete() {
    let server = common::make_server();
    common::create_line(&server, "1호선").await;
    server.delete("/lines/1").await;

    let created = common::create_line(&server, "2호선").await;

    assert_eq!(created["id"], 2);
}

// ─── TRAILING SLASH ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_trailing_slash_on_collection() {
    let app = common::make_app();

    let (status, _) = common::send(
        &app,
        Method::POST,
        "/lines/",
        Some(json!({ "name": "1호선" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = common::send(&app, Method::GET, "/lines/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "1호선");
}

#[tokio::test]
async fn test_trailing_slash_on_single_line() {
    let app = common::make_app();
    common::send(
        &app,
        Method::POST,
        "/lines",
        Some(json!({ "name": "4호선" })),
    )
    .await;

    let (status, body) = common::send(
        &app,
        Method::PUT,
        "/lines/1/",
        Some(json!({ "name": "5호선" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "5호선");

    let (status, body) = common::send(&app, Method::GET, "/lines/1/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "5호선");
}
