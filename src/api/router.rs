use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put, delete},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{
    coupon, dashboard, donation, event, family, health, profile, registration, ticket,
};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Events
        .route("/api/v1/events", get(event::list_events).post(event::create_event))
        .route("/api/v1/events/{event_id}", get(event::get_event).put(event::update_event).delete(event::delete_event))

        // Tickets
        .route("/api/v1/events/{event_id}/tickets", get(ticket::list_tickets).post(ticket::create_ticket))
        .route("/api/v1/tickets/{ticket_id}", put(ticket::update_ticket).delete(ticket::delete_ticket))

        // Coupons
        .route("/api/v1/events/{event_id}/coupons", get(coupon::list_coupons).post(coupon::create_coupon))
        .route("/api/v1/coupons/{coupon_id}", delete(coupon::delete_coupon))

        // Registrations
        .route("/api/v1/events/{event_id}/register", post(registration::register))
        .route("/api/v1/registrations/me", get(registration::my_registrations))
        .route("/api/v1/events/{event_id}/registrations", get(registration::event_registrations))
        .route("/api/v1/registrations/{registration_id}/check-in", post(registration::check_in))

        // Family
        .route("/api/v1/family-members", get(family::list_family_members).post(family::create_family_member))
        .route("/api/v1/family-members/{member_id}", put(family::update_family_member).delete(family::delete_family_member))

        // Profile
        .route("/api/v1/profile", get(profile::get_profile).put(profile::update_profile))

        // Donations
        .route("/api/v1/donations", get(donation::my_donations).post(donation::create_donation))
        .route("/api/v1/admin/donations", get(donation::all_donations))
        .route("/api/v1/admin/donations/{donation_id}", delete(donation::delete_donation))

        // Admin dashboard
        .route("/api/v1/admin/dashboard", get(dashboard::dashboard_stats))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
