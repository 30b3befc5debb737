use chrono::{Datelike, TimeZone, Utc};
use serde::Serialize;

use crate::domain::models::family::AgeGroups;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_users: i64,
    pub total_events: i64,
    pub upcoming_events: i64,
    pub past_events: i64,
    pub total_registrations: i64,
    pub total_donations: f64,
    pub monthly_donations: f64,
    pub total_members: i64,
    pub total_families: i64,
    pub age_groups: AgeGroups,
}

pub async fn collect(state: &AppState) -> Result<DashboardStats, AppError> {
    let now = Utc::now();
    let month_start = Utc
        .with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
        .single()
        .ok_or(AppError::Internal)?;

    let total_users = state.user_repo.count().await?;
    let total_events = state.event_repo.count().await?;
    let upcoming_events = state.event_repo.count_upcoming(now).await?;
    let total_registrations = state.registration_repo.count().await?;
    let total_donations = state.donation_repo.total_amount().await?;
    let monthly_donations = state.donation_repo.total_since(month_start).await?;
    let total_members = state.family_repo.count().await?;
    let total_families = state.family_repo.count_families().await?;
    let age_groups = state.family_repo.age_groups().await?;

    Ok(DashboardStats {
        total_users,
        total_events,
        upcoming_events,
        past_events: total_events - upcoming_events,
        total_registrations,
        total_donations,
        monthly_donations,
        total_members,
        total_families,
        age_groups,
    })
}
