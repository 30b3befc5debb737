use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Relationship value marking the record that mirrors the account holder.
pub const RELATIONSHIP_SELF: &str = "self";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct FamilyMember {
    pub id: String,
    pub user_id: String,
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
    pub created_at: DateTime<Utc>,
}

/// Age split of all family members: kids are 10 and under, seniors 60 and
/// over, adults everything between. Records without a birth year fall into
/// no bucket.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, Default)]
pub struct AgeGroups {
    pub kids: i64,
    pub adults: i64,
    pub seniors: i64,
}

pub struct NewFamilyMemberParams {
    pub user_id: String,
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

impl FamilyMember {
    pub fn new(params: NewFamilyMemberParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: params.user_id,
            first_name: params.first_name,
            last_name: params.last_name,
            birth_year: params.birth_year,
            gender: params.gender,
            email: params.email,
            phone_e164: params.phone_e164,
            relationship: params.relationship,
            relationship_other: params.relationship_other,
            occupation: params.occupation,
            business_info: params.business_info,
            created_at: Utc::now(),
        }
    }

    pub fn is_main_user(&self) -> bool {
        self.relationship == RELATIONSHIP_SELF
    }
}
