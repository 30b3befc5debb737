use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub location: String,
    /// NULL means unlimited capacity.
    pub max_capacity: Option<i64>,
    pub registration_deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

pub struct NewEventParams {
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub location: String,
    pub max_capacity: Option<i64>,
    pub registration_deadline: Option<DateTime<Utc>>,
}

impl Event {
    pub fn new(params: NewEventParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: params.title,
            description: params.description,
            event_date: params.event_date,
            location: params.location,
            max_capacity: params.max_capacity,
            registration_deadline: params.registration_deadline,
            created_at: Utc::now(),
        }
    }
}

/// Event joined with its live registration row count. Capacity checks and
/// listings work off this shape rather than the bare row.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct EventSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub location: String,
    pub max_capacity: Option<i64>,
    pub registration_deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub registration_count: i64,
}
