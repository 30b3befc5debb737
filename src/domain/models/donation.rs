use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Donation {
    pub id: String,
    pub user_id: String,
    pub amount: f64,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Donation {
    pub fn new(user_id: String, amount: f64, message: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            amount,
            message,
            created_at: Utc::now(),
        }
    }
}
