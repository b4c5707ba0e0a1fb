mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use common::{create_test_app_config, create_test_client_json, setup_test_app_with_config};
use tower::ServiceExt;

#[tokio::test]
async fn test_location_uses_normalized_base_path() {
    let mut config = create_test_app_config();
    config.server.base_path = "v1/".to_string();
    let app = setup_test_app_with_config(config).await.unwrap();

    let payload = create_test_client_json("Lena", "85030312345");
    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/clients")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&payload).unwrap()))
        .unwrap();

    let response = app.router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/v1/clients/1"
    );
}

#[tokio::test]
async fn test_unsupported_method_rejected() {
    let app = common::setup_test_app().await.unwrap();

    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/trips")
        .body(Body::empty())
        .unwrap();

    let response = app.router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_health_stays_at_root() {
    let app = common::setup_test_app().await.unwrap();

    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
}
