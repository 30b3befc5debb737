use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::{CreateTicketRequest, UpdateTicketRequest};
use crate::api::extractors::auth::AdminUser;
use crate::domain::models::ticket::EventTicket;
use crate::error::AppError;
use crate::state::AppState;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

pub async fn list_tickets(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let tickets = state.ticket_repo.list_active_by_event(&event_id).await?;
    Ok(Json(json!({ "success": true, "tickets": tickets })))
}

pub async fn create_ticket(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(event_id): Path<String>,
    Json(payload): Json<CreateTicketRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Missing required field: name".into()));
    }
    if payload.price < 0.0 {
        return Err(AppError::Validation("price must not be negative".into()));
    }

    let ticket = EventTicket::new(
        event_id,
        payload.name,
        payload.price,
        payload.is_active.unwrap_or(true),
    );

    let created = state.ticket_repo.create(&ticket).await?;
    info!("Ticket created: {} for event {}", created.id, created.event_id);

    Ok((StatusCode::CREATED, Json(json!({ "success": true, "ticket": created }))))
}

pub async fn update_ticket(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(ticket_id): Path<String>,
    Json(payload): Json<UpdateTicketRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut ticket = state.ticket_repo.find_by_id(&ticket_id).await?
        .ok_or(AppError::NotFound("Ticket not found".into()))?;

    if let Some(name) = payload.name { ticket.name = name; }
    if let Some(price) = payload.price {
        if price < 0.0 {
            return Err(AppError::Validation("price must not be negative".into()));
        }
        ticket.price = price;
    }
    if let Some(is_active) = payload.is_active { ticket.is_active = is_active; }

    let updated = state.ticket_repo.update(&ticket).await?;
    Ok(Json(json!({ "success": true, "ticket": updated })))
}

pub async fn delete_ticket(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(ticket_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.ticket_repo.delete(&ticket_id).await?;
    info!("Ticket deleted: {}", ticket_id);
    Ok(Json(json!({ "success": true, "message": "Ticket deleted" })))
}
