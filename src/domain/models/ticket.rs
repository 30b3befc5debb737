use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct EventTicket {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub price: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl EventTicket {
    pub fn new(event_id: String, name: String, price: f64, is_active: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_id,
            name,
            price,
            is_active,
            created_at: Utc::now(),
        }
    }
}
