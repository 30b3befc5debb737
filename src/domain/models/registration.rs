use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::services::registration::Quote;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Registration {
    pub id: String,
    pub user_id: String,
    pub event_id: String,
    pub ticket_id: Option<String>,
    pub coupon_id: Option<String>,
    pub guest_count: i64,
    pub total_amount: f64,
    pub discount_amount: f64,
    pub final_amount: f64,
    pub checked_in: bool,
    pub checkin_time: Option<DateTime<Utc>>,
    pub checked_in_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewRegistrationParams {
    pub user_id: String,
    pub event_id: String,
    pub ticket_id: Option<String>,
    pub coupon_id: Option<String>,
    pub guest_count: i64,
    pub quote: Quote,
}

impl Registration {
    pub fn new(params: NewRegistrationParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: params.user_id,
            event_id: params.event_id,
            ticket_id: params.ticket_id,
            coupon_id: params.coupon_id,
            guest_count: params.guest_count,
            total_amount: params.quote.total_amount,
            discount_amount: params.quote.discount_amount,
            final_amount: params.quote.final_amount,
            checked_in: false,
            checkin_time: None,
            checked_in_by: None,
            created_at: Utc::now(),
        }
    }
}

/// A member's own registration joined with event and ticket details.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct RegistrationWithEvent {
    pub id: String,
    pub event_id: String,
    pub event_title: String,
    pub event_date: DateTime<Utc>,
    pub event_location: String,
    pub ticket_name: Option<String>,
    pub ticket_price: Option<f64>,
    pub guest_count: i64,
    pub total_amount: f64,
    pub discount_amount: f64,
    pub final_amount: f64,
    pub checked_in: bool,
    pub created_at: DateTime<Utc>,
}

/// Attendee listing row for the admin side of an event.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct RegistrationWithAttendee {
    pub id: String,
    pub user_id: String,
    pub attendee_name: String,
    pub attendee_email: String,
    pub ticket_name: Option<String>,
    pub guest_count: i64,
    pub final_amount: f64,
    pub checked_in: bool,
    pub checkin_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
