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
async fn test_admin_creates_ticket() {
    let app = TestApp::new().await;
    let admin = app.seed_user(2).await;
    let event_id = app.seed_event(None).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST")
            .uri(format!("/api/v1/events/{}/tickets", event_id))
            .header(header::COOKIE, session_cookie(&admin, 2))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({ "name": "VIP", "price": 100.0 }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = parse_body(res).await;
    assert_eq!(body["ticket"]["name"], "VIP");
    assert_eq!(body["ticket"]["price"], 100.0);
    assert_eq!(body["ticket"]["is_active"], true);
}

#[tokio::test]
async fn test_ticket_for_missing_event_404() {
    let app = TestApp::new().await;
    let admin = app.seed_user(2).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST")
            .uri("/api/v1/events/no-such-event/tickets")
            .header(header::COOKIE, session_cookie(&admin, 2))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({ "name": "VIP", "price": 100.0 }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_negative_price_rejected() {
    let app = TestApp::new().await;
    let admin = app.seed_user(2).await;
    let event_id = app.seed_event(None).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST")
            .uri(format!("/api/v1/events/{}/tickets", event_id))
            .header(header::COOKIE, session_cookie(&admin, 2))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({ "name": "Oops", "price": -5.0 }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_deactivated_ticket_hidden_from_listing() {
    let app = TestApp::new().await;
    let admin = app.seed_user(2).await;
    let event_id = app.seed_event(None).await;
    let ticket_id = app.seed_ticket(&event_id, 20.0, true).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT")
            .uri(format!("/api/v1/tickets/{}", ticket_id))
            .header(header::COOKIE, session_cookie(&admin, 2))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({ "is_active": false }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/events/{}/tickets", event_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    assert_eq!(body["tickets"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_ticket_update_requires_admin() {
    let app = TestApp::new().await;
    let member = app.seed_user(1).await;
    let event_id = app.seed_event(None).await;
    let ticket_id = app.seed_ticket(&event_id, 20.0, true).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT")
            .uri(format!("/api/v1/tickets/{}", ticket_id))
            .header(header::COOKIE, session_cookie(&member, 1))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({ "price": 0.0 }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_ticket() {
    let app = TestApp::new().await;
    let admin = app.seed_user(2).await;
    let event_id = app.seed_event(None).await;
    let ticket_id = app.seed_ticket(&event_id, 20.0, true).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE")
            .uri(format!("/api/v1/tickets/{}", ticket_id))
            .header(header::COOKIE, session_cookie(&admin, 2))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/events/{}/tickets", event_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    assert_eq!(body["tickets"].as_array().unwrap().len(), 0);
}
