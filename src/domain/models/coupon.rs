use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Coupon {
    pub id: String,
    pub event_id: String,
    pub code: String,
    pub discount_amount: f64,
    /// NULL means unlimited uses.
    pub usage_limit: Option<i64>,
    pub times_used: i64,
    pub one_per_user: bool,
    pub is_active: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

pub struct NewCouponParams {
    pub event_id: String,
    pub code: String,
    pub discount_amount: f64,
    pub usage_limit: Option<i64>,
    pub one_per_user: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Coupon {
    pub fn new(params: NewCouponParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_id: params.event_id,
            code: params.code,
            discount_amount: params.discount_amount,
            usage_limit: params.usage_limit,
            times_used: 0,
            one_per_user: params.one_per_user,
            is_active: true,
            expires_at: params.expires_at,
            created_at: Utc::now(),
        }
    }
}
