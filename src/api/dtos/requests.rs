use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub location: String,
    pub max_capacity: Option<i64>,
    pub registration_deadline: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub max_capacity: Option<i64>,
    pub registration_deadline: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
pub struct CreateTicketRequest {
    pub name: String,
    pub price: f64,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct UpdateTicketRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateCouponRequest {
    pub code: String,
    pub discount_amount: f64,
    pub usage_limit: Option<i64>,
    pub one_per_user: Option<bool>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub ticket_id: Option<String>,
    pub coupon_id: Option<String>,
    #[serde(default)]
    pub guest_count: i64,
}

#[derive(Deserialize)]
pub struct CreateFamilyMemberRequest {
    pub first_name: String,
    pub last_name: String,
    pub birth_year: Option<i32>,
    pub gender: Option<String>,
    pub email: Option<String>,
    pub phone_e164: Option<String>,
    pub relationship: String,
    pub relationship_other: Option<String>,
    pub occupation: Option<String>,
    pub business_info: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateFamilyMemberRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_year: Option<i32>,
    pub gender: Option<String>,
    pub email: Option<String>,
    pub phone_e164: Option<String>,
    pub relationship: Option<String>,
    pub relationship_other: Option<String>,
    pub occupation: Option<String>,
    pub business_info: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_e164: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateDonationRequest {
    pub amount: f64,
    pub message: Option<String>,
}
