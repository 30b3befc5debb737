mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{session_cookie, TestApp};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_get_profile() {
    let app = TestApp::new().await;
    let user = app.seed_user(1).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/profile")
            .header(header::COOKIE, session_cookie(&user, 1))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["user"]["id"], user.as_str());
    assert_eq!(body["user"]["first_name"], "Test");
}

#[tokio::test]
async fn test_profile_requires_session() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/profile")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_profile_fields() {
    let app = TestApp::new().await;
    let user = app.seed_user(1).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri("/api/v1/profile")
            .header(header::COOKIE, session_cookie(&user, 1))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "first_name": "Priya",
                "email": "priya@example.com"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["user"]["first_name"], "Priya");
    assert_eq!(body["user"]["email"], "priya@example.com");
}

#[tokio::test]
async fn test_update_profile_invalid_email_rejected() {
    let app = TestApp::new().await;
    let user = app.seed_user(1).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri("/api/v1/profile")
            .header(header::COOKIE, session_cookie(&user, 1))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({ "email": "not-an-email" }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_profile_empty_name_rejected() {
    let app = TestApp::new().await;
    let user = app.seed_user(1).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri("/api/v1/profile")
            .header(header::COOKIE, session_cookie(&user, 1))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({ "first_name": "  " }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
