use axum::{extract::State, response::IntoResponse, Json};
use crate::api::dtos::requests::UpdateProfileRequest;
use crate::api::extractors::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let profile = state.user_repo.find_by_id(&user.user_id).await?
        .ok_or(AppError::NotFound("User not found".into()))?;
    Ok(Json(json!({ "success": true, "user": profile })))
}

pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut profile = state.user_repo.find_by_id(&user.user_id).await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    if let Some(first_name) = payload.first_name {
        if first_name.trim().is_empty() {
            return Err(AppError::Validation("first_name cannot be empty".into()));
        }
        profile.first_name = first_name;
    }
    if let Some(last_name) = payload.last_name {
        if last_name.trim().is_empty() {
            return Err(AppError::Validation("last_name cannot be empty".into()));
        }
        profile.last_name = last_name;
    }
    if let Some(email) = payload.email {
        if !email.contains('@') {
            return Err(AppError::Validation("Invalid email address".into()));
        }
        profile.email = email;
    }
    if payload.phone_e164.is_some() {
        profile.phone_e164 = payload.phone_e164;
    }

    let updated = state.user_repo.update(&profile).await?;
    info!("Profile updated: {}", updated.id);
    Ok(Json(json!({ "success": true, "user": updated })))
}
