use axum::{extract::State, response::IntoResponse, Json};
use crate::api::extractors::auth::AdminUser;
use crate::domain::services::dashboard;
use crate::error::AppError;
use crate::state::AppState;
use serde_json::json;
use std::sync::Arc;

pub async fn dashboard_stats(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let stats = dashboard::collect(&state).await?;
    Ok(Json(json!({ "success": true, "stats": stats })))
}
