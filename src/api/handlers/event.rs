use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::{CreateEventRequest, UpdateEventRequest};
use crate::api::extractors::auth::AdminUser;
use crate::domain::models::event::{Event, NewEventParams};
use crate::error::AppError;
use crate::state::AppState;
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

pub async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let events = state.event_repo.list().await?;
    Ok(Json(json!({ "success": true, "events": events })))
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    let tickets = state.ticket_repo.list_active_by_event(&event.id).await?;
    let coupons = state.coupon_repo.list_valid_by_event(&event.id, Utc::now()).await?;

    let mut event_json = serde_json::to_value(&event).map_err(|_| AppError::Internal)?;
    if let Value::Object(ref mut map) = event_json {
        map.insert("tickets".into(), serde_json::to_value(&tickets).map_err(|_| AppError::Internal)?);
        map.insert("coupons".into(), serde_json::to_value(&coupons).map_err(|_| AppError::Internal)?);
    }

    Ok(Json(json!({ "success": true, "event": event_json })))
}

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    for (field, value) in [
        ("title", &payload.title),
        ("description", &payload.description),
        ("location", &payload.location),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("Missing required field: {}", field)));
        }
    }

    if let Some(capacity) = payload.max_capacity {
        if capacity <= 0 {
            return Err(AppError::Validation("max_capacity must be positive".into()));
        }
    }

    let event = Event::new(NewEventParams {
        title: payload.title,
        description: payload.description,
        event_date: payload.event_date,
        location: payload.location,
        max_capacity: payload.max_capacity,
        registration_deadline: payload.registration_deadline,
    });

    let created = state.event_repo.create(&event).await?;
    info!("Event created: {} ({})", created.title, created.id);

    Ok((StatusCode::CREATED, Json(json!({ "success": true, "event_id": created.id }))))
}

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(event_id): Path<String>,
    Json(payload): Json<UpdateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    let summary = state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    let mut event = Event {
        id: summary.id,
        title: summary.title,
        description: summary.description,
        event_date: summary.event_date,
        location: summary.location,
        max_capacity: summary.max_capacity,
        registration_deadline: summary.registration_deadline,
        created_at: summary.created_at,
    };

    if let Some(title) = payload.title { event.title = title; }
    if let Some(description) = payload.description { event.description = description; }
    if let Some(event_date) = payload.event_date { event.event_date = event_date; }
    if let Some(location) = payload.location { event.location = location; }
    if let Some(max_capacity) = payload.max_capacity {
        if max_capacity <= 0 {
            return Err(AppError::Validation("max_capacity must be positive".into()));
        }
        event.max_capacity = Some(max_capacity);
    }
    if let Some(deadline) = payload.registration_deadline {
        event.registration_deadline = Some(deadline);
    }

    let updated = state.event_repo.update(&event).await?;
    info!("Event updated: {}", updated.id);

    Ok(Json(json!({ "success": true, "message": "Event updated successfully" })))
}

pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.event_repo.delete(&event_id).await?;
    info!("Event deleted: {}", event_id);
    Ok(Json(json!({ "success": true, "message": "Event deleted" })))
}
