use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Role levels: 1 = member, 2 = moderator, 3 = admin.
pub const ROLE_MEMBER: i32 = 1;
pub const ROLE_MODERATOR: i32 = 2;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_e164: Option<String>,
    pub role: i32,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(first_name: String, last_name: String, email: String, role: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            first_name,
            last_name,
            email,
            phone_e164: None,
            role,
            created_at: Utc::now(),
        }
    }
}
