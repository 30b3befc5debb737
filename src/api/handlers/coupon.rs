use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::CreateCouponRequest;
use crate::api::extractors::auth::AdminUser;
use crate::domain::models::coupon::{Coupon, NewCouponParams};
use crate::error::AppError;
use crate::state::AppState;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

pub async fn list_coupons(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let coupons = state.coupon_repo.list_valid_by_event(&event_id, Utc::now()).await?;
    Ok(Json(json!({ "success": true, "coupons": coupons })))
}

pub async fn create_coupon(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(event_id): Path<String>,
    Json(payload): Json<CreateCouponRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    if payload.code.trim().is_empty() {
        return Err(AppError::Validation("Missing required field: code".into()));
    }
    if payload.discount_amount <= 0.0 {
        return Err(AppError::Validation("discount_amount must be positive".into()));
    }
    if let Some(limit) = payload.usage_limit {
        if limit <= 0 {
            return Err(AppError::Validation("usage_limit must be positive".into()));
        }
    }

    let coupon = Coupon::new(NewCouponParams {
        event_id,
        code: payload.code,
        discount_amount: payload.discount_amount,
        usage_limit: payload.usage_limit,
        one_per_user: payload.one_per_user.unwrap_or(false),
        expires_at: payload.expires_at,
    });

    // UNIQUE(event_id, code) turns a duplicate code into a 409 here.
    let created = state.coupon_repo.create(&coupon).await?;
    info!("Coupon created: {} for event {}", created.code, created.event_id);

    Ok((StatusCode::CREATED, Json(json!({ "success": true, "coupon": created }))))
}

pub async fn delete_coupon(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(coupon_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.coupon_repo.delete(&coupon_id).await?;
    info!("Coupon deleted: {}", coupon_id);
    Ok(Json(json!({ "success": true, "message": "Coupon deleted" })))
}
