//! Integration tests for the health endpoint.

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_returns_200_with_status_ok() {
    let app = common::build_test_app();

    let response = common::get(&app, "/health").await;

    assert_eq!(response.status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["cart_lines"], 0);
}

#[tokio::test]
async fn test_unknown_route_returns_404_page() {
    let app = common::build_test_app();

    let response = common::get(&app, "/api/v1/nonexistent").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("Siden blev ikke fundet"));
}

#[tokio::test]
async fn test_unknown_action_method_is_rejected() {
    let app = common::build_test_app();

    let response = common::post_form(&app, "/cart", &[]).await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}
