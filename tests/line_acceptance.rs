//! 지하철 노선 관련 기능
//!
//! End-to-end flows over the `/lines` collection.

mod common;

use axum::http::StatusCode;
use serde_json::json;

/// When a line is created, it can be found in the line listing.
#[tokio::test]
async fn test_create_line() {
    let server = common::make_server();

    // when
    let response = server
        .post("/lines")
        .json(&json!({ "name": "1호선" }))
        .await;

    // then
    response.assert_status(StatusCode::CREATED);

    let names = common::line_names(&server).await;
    assert!(names.contains(&"1호선".to_string()));
}

/// Given two lines, the listing returns both.
#[tokio::test]
async fn test_list_two_lines() {
    let server = common::make_server();

    // given
    common::create_line(&server, "1호선").await;
    common::create_line(&server, "2호선").await;

    // when
    let names = common::line_names(&server).await;

    // then
    assert_eq!(names.len(), 2);
}

/// Given a line, it is retrievable from the listing.
#[tokio::test]
async fn test_get_line() {
    let server = common::make_server();

    // given
    common::create_line(&server, "3호선").await;

    // when
    let names = common::line_names(&server).await;

    // then
    assert!(names.contains(&"3호선".to_string()));
}

/// Given a line, renaming it changes the listing.
#[tokio::test]
async fn test_update_line() {
    let server = common::make_server();

    // given
    common::create_line(&server, "4호선").await;

    // when
    server
        .put("/lines/1")
        .json(&json!({ "name": "5호선" }))
        .await
        .assert_status_ok();

    // then
    let names = common::line_names(&server).await;
    assert_eq!(names, vec!["5호선".to_string()]);
    assert!(!names.contains(&"4호선".to_string()));
}

/// Given a line, deleting it empties the listing.
#[tokio::test]
async fn test_delete_line() {
    let server = common::make_server();

    // given
    common::create_line(&server, "1호선").await;
    assert_eq!(common::line_names(&server).await.len(), 1);

    // when
    server
        .delete("/lines/1")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    // then
    assert!(common::line_names(&server).await.is_empty());
}
