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
async fn test_dashboard_requires_admin() {
    let app = TestApp::new().await;
    let member = app.seed_user(1).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/admin/dashboard")
            .header(header::COOKIE, session_cookie(&member, 1))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/admin/dashboard")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_dashboard_counts() {
    let app = TestApp::new().await;
    let admin = app.seed_user(2).await;
    let alice = app.seed_user(1).await;
    let bob = app.seed_user(1).await;

    let event_id = app.seed_event(Some(50)).await;

    for user in [&alice, &bob] {
        app.router.clone().oneshot(
            Request::builder().method("POST")
                .uri(format!("/api/v1/events/{}/register", event_id))
                .header(header::COOKIE, session_cookie(user, 1))
                .header("Content-Type", "application/json")
                .body(Body::from(json!({}).to_string())).unwrap()
        ).await.unwrap();
    }

    app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/donations")
            .header(header::COOKIE, session_cookie(&alice, 1))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({ "amount": 120.0 }).to_string())).unwrap()
    ).await.unwrap();

    // Two family records for alice, one for bob.
    for (user, payload) in [
        (&alice, json!({ "first_name": "Asha", "last_name": "P", "birth_year": 2018, "relationship": "child" })),
        (&alice, json!({ "first_name": "Ravi", "last_name": "P", "birth_year": 1985, "relationship": "self" })),
        (&bob, json!({ "first_name": "Meera", "last_name": "S", "birth_year": 1950, "relationship": "parent" })),
    ] {
        app.router.clone().oneshot(
            Request::builder().method("POST").uri("/api/v1/family-members")
                .header(header::COOKIE, session_cookie(user, 1))
                .header("Content-Type", "application/json")
                .body(Body::from(payload.to_string())).unwrap()
        ).await.unwrap();
    }

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/admin/dashboard")
            .header(header::COOKIE, session_cookie(&admin, 2))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    let stats = &body["stats"];

    assert_eq!(stats["total_users"], 3);
    assert_eq!(stats["total_events"], 1);
    assert_eq!(stats["upcoming_events"], 1);
    assert_eq!(stats["past_events"], 0);
    assert_eq!(stats["total_registrations"], 2);
    assert_eq!(stats["total_donations"], 120.0);
    assert_eq!(stats["monthly_donations"], 120.0);
    assert_eq!(stats["total_members"], 3);
    assert_eq!(stats["total_families"], 2);
    // 2018 birth -> kid, 1985 -> adult, 1950 -> senior
    assert_eq!(stats["age_groups"]["kids"], 1);
    assert_eq!(stats["age_groups"]["adults"], 1);
    assert_eq!(stats["age_groups"]["seniors"], 1);
}
