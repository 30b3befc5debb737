use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::CreateDonationRequest;
use crate::api::extractors::auth::{AdminUser, AuthUser};
use crate::domain::models::donation::Donation;
use crate::error::AppError;
use crate::state::AppState;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

pub async fn create_donation(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<CreateDonationRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !(payload.amount > 0.0) {
        return Err(AppError::Validation("Donation amount must be positive".into()));
    }

    let donation = Donation::new(user.user_id.clone(), payload.amount, payload.message);
    let created = state.donation_repo.create(&donation).await?;
    info!("Donation recorded: {} amount {}", created.id, created.amount);

    Ok((StatusCode::CREATED, Json(json!({ "success": true, "donation": created }))))
}

pub async fn my_donations(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let donations = state.donation_repo.list_by_user(&user.user_id).await?;
    Ok(Json(json!({ "success": true, "donations": donations })))
}

pub async fn all_donations(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let donations = state.donation_repo.list_all().await?;
    let total = state.donation_repo.total_amount().await?;
    Ok(Json(json!({ "success": true, "donations": donations, "total_amount": total })))
}

pub async fn delete_donation(
    State(state): State<Arc<AppState>>,
    admin: AdminUser,
    Path(donation_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.donation_repo.delete(&donation_id).await?;
    info!("Donation {} deleted by {}", donation_id, admin.0.user_id);
    Ok(Json(json!({ "success": true, "message": "Donation deleted" })))
}
