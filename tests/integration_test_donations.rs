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

async fn donate(app: &TestApp, user_id: &str, amount: f64, message: Option<&str>) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/donations")
            .header(header::COOKIE, session_cookie(user_id, 1))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({ "amount": amount, "message": message }).to_string())).unwrap()
    ).await.unwrap()
}

#[tokio::test]
async fn test_donation_recorded_and_listed() {
    let app = TestApp::new().await;
    let user = app.seed_user(1).await;

    let res = donate(&app, &user, 50.0, Some("For the youth program")).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = parse_body(res).await;
    assert_eq!(body["donation"]["amount"], 50.0);
    assert_eq!(body["donation"]["message"], "For the youth program");

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/donations")
            .header(header::COOKIE, session_cookie(&user, 1))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    let donations = body["donations"].as_array().unwrap();
    assert_eq!(donations.len(), 1);
    assert_eq!(donations[0]["amount"], 50.0);
}

#[tokio::test]
async fn test_non_positive_amount_rejected() {
    let app = TestApp::new().await;
    let user = app.seed_user(1).await;

    let res = donate(&app, &user, 0.0, None).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = donate(&app, &user, -10.0, None).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_member_sees_only_own_donations() {
    let app = TestApp::new().await;
    let alice = app.seed_user(1).await;
    let bob = app.seed_user(1).await;

    donate(&app, &alice, 25.0, None).await;
    donate(&app, &bob, 75.0, None).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/donations")
            .header(header::COOKIE, session_cookie(&alice, 1))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    let donations = body["donations"].as_array().unwrap();
    assert_eq!(donations.len(), 1);
    assert_eq!(donations[0]["amount"], 25.0);
}

#[tokio::test]
async fn test_admin_list_includes_total() {
    let app = TestApp::new().await;
    let alice = app.seed_user(1).await;
    let bob = app.seed_user(1).await;
    let admin = app.seed_user(2).await;

    donate(&app, &alice, 25.0, None).await;
    donate(&app, &bob, 75.0, None).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/admin/donations")
            .header(header::COOKIE, session_cookie(&admin, 2))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["donations"].as_array().unwrap().len(), 2);
    assert_eq!(body["total_amount"], 100.0);
}

#[tokio::test]
async fn test_admin_list_forbidden_for_member() {
    let app = TestApp::new().await;
    let member = app.seed_user(1).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/admin/donations")
            .header(header::COOKIE, session_cookie(&member, 1))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_deletes_donation() {
    let app = TestApp::new().await;
    let user = app.seed_user(1).await;
    let admin = app.seed_user(2).await;

    let res = donate(&app, &user, 40.0, None).await;
    let body = parse_body(res).await;
    let donation_id = body["donation"]["id"].as_str().unwrap().to_string();

    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE")
            .uri(format!("/api/v1/admin/donations/{}", donation_id))
            .header(header::COOKIE, session_cookie(&admin, 2))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/donations")
            .header(header::COOKIE, session_cookie(&user, 1))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    assert_eq!(body["donations"].as_array().unwrap().len(), 0);
}
