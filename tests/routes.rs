//! Integration tests for the router, exercised in-process via tower.
//!
//! TLS termination is handled by rustls below the router and is not covered
//! here; these tests assert the route contract the load balancer depends on.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::Service;

use beacon::config::AppConfig;
use beacon::routes::create_router;
use beacon::state::AppState;

fn app_with_port(port: u16) -> axum::Router {
    let mut config = AppConfig::default();
    config.http.port = port;
    create_router(AppState::new(config))
}

async fn body_string(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let mut app = app_with_port(443);

    let response = app
        .call(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, r#"{"status":"healthy"}"#);
}

#[tokio::test]
async fn test_health_is_not_cacheable() {
    let mut app = app_with_port(443);

    let response = app
        .call(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let cache_control = response
        .headers()
        .get(axum::http::header::CACHE_CONTROL)
        .expect("health response must carry Cache-Control");
    assert_eq!(cache_control, "no-store");
}

#[tokio::test]
async fn test_root_endpoint_reports_configured_port() {
    let mut app = app_with_port(8443);

    let response = app
        .call(
            Request::builder()
                .method("GET")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["message"], "Hello from ECS Node.js App with HTTPS");
    assert_eq!(body["port"], 8443);
    assert_eq!(body["protocol"], "HTTPS");
}

#[tokio::test]
async fn test_root_endpoint_default_port() {
    let mut app = app_with_port(443);

    let response = app
        .call(
            Request::builder()
                .method("GET")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["port"], 443);
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let mut app = app_with_port(443);

    let response = app
        .call(
            Request::builder()
                .method("GET")
                .uri("/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let mut app = app_with_port(443);

    let response = app
        .call(
            Request::builder()
                .method("POST")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
