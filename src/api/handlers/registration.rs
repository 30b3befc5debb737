use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::RegisterRequest;
use crate::api::extractors::auth::{AdminUser, AuthUser};
use crate::domain::models::registration::{NewRegistrationParams, Registration};
use crate::domain::services::registration::{
    check_capacity, check_coupon, check_deadline, check_ticket, quote, RegistrationError,
};
use crate::error::AppError;
use crate::state::AppState;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Registers the calling member for an event. Checks run against a fresh
/// read here; the repository repeats the capacity and coupon checks inside
/// its insert transaction so concurrent requests cannot oversell.
pub async fn register(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(event_id): Path<String>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let now = Utc::now();

    let event = state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    check_deadline(&event, now)?;
    check_capacity(&event, payload.guest_count)?;

    if state.registration_repo.exists_for_user(&user.user_id, &event_id).await? {
        return Err(RegistrationError::AlreadyRegistered.into());
    }

    let ticket = match payload.ticket_id {
        Some(ref ticket_id) => {
            let ticket = state.ticket_repo.find_by_id(ticket_id).await?
                .ok_or(AppError::from(RegistrationError::InvalidTicket))?;
            check_ticket(&ticket, &event_id)?;
            Some(ticket)
        }
        None => None,
    };

    let coupon = match payload.coupon_id {
        Some(ref coupon_id) => {
            let coupon = state.coupon_repo.find_by_id(coupon_id).await?
                .ok_or(AppError::from(RegistrationError::InvalidCoupon))?;
            let uses = state.registration_repo
                .coupon_uses_by_user(&user.user_id, &event_id, coupon_id)
                .await?;
            check_coupon(&coupon, &event_id, uses, now)?;
            Some(coupon)
        }
        None => None,
    };

    let discount = coupon.as_ref().map(|c| c.discount_amount).unwrap_or(0.0);
    let pricing = quote(ticket.as_ref(), payload.guest_count, discount);

    let registration = Registration::new(NewRegistrationParams {
        user_id: user.user_id.clone(),
        event_id: event_id.clone(),
        ticket_id: ticket.map(|t| t.id),
        coupon_id: coupon.map(|c| c.id),
        guest_count: payload.guest_count,
        quote: pricing,
    });

    let created = state.registration_repo.create(&registration, event.max_capacity).await?;
    info!(
        "Registration created: user {} event {} guests {} final {}",
        user.user_id, event_id, created.guest_count, created.final_amount
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "registration_id": created.id,
            "total_amount": created.total_amount,
            "discount_amount": created.discount_amount,
            "final_amount": created.final_amount,
        })),
    ))
}

pub async fn my_registrations(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let registrations = state.registration_repo.list_by_user(&user.user_id).await?;
    Ok(Json(json!({ "success": true, "registrations": registrations })))
}

pub async fn event_registrations(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    let registrations = state.registration_repo.list_by_event(&event_id).await?;
    Ok(Json(json!({ "success": true, "registrations": registrations })))
}

pub async fn check_in(
    State(state): State<Arc<AppState>>,
    admin: AdminUser,
    Path(registration_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state.registration_repo
        .check_in(&registration_id, &admin.0.user_id)
        .await?;

    if !updated {
        return Err(AppError::Conflict("Check-in failed or already checked in".into()));
    }

    info!("Checked in registration {} by {}", registration_id, admin.0.user_id);
    Ok(Json(json!({ "success": true, "message": "Checked in" })))
}
