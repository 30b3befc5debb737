use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::{CreateFamilyMemberRequest, UpdateFamilyMemberRequest};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::family::{FamilyMember, NewFamilyMemberParams};
use crate::error::AppError;
use crate::state::AppState;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

pub async fn list_family_members(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let members = state.family_repo.list_by_user(&user.user_id).await?;
    Ok(Json(json!({ "success": true, "family_members": members })))
}

pub async fn create_family_member(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<CreateFamilyMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.first_name.trim().is_empty() || payload.last_name.trim().is_empty() {
        return Err(AppError::Validation("First and last name are required".into()));
    }
    if payload.relationship.trim().is_empty() {
        return Err(AppError::Validation("Missing required field: relationship".into()));
    }

    let member = FamilyMember::new(NewFamilyMemberParams {
        user_id: user.user_id.clone(),
        first_name: payload.first_name,
        last_name: payload.last_name,
        birth_year: payload.birth_year,
        gender: payload.gender,
        email: payload.email,
        phone_e164: payload.phone_e164,
        relationship: payload.relationship,
        relationship_other: payload.relationship_other,
        occupation: payload.occupation,
        business_info: payload.business_info,
    });

    let created = state.family_repo.create(&member).await?;
    info!("Family member added: {} for user {}", created.id, user.user_id);

    Ok((StatusCode::CREATED, Json(json!({ "success": true, "family_member": created }))))
}

pub async fn update_family_member(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(member_id): Path<String>,
    Json(payload): Json<UpdateFamilyMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut member = find_owned(&state, &member_id, &user.user_id).await?;

    if let Some(first_name) = payload.first_name {
        if first_name.trim().is_empty() {
            return Err(AppError::Validation("first_name cannot be empty".into()));
        }
        member.first_name = first_name;
    }
    if let Some(last_name) = payload.last_name {
        if last_name.trim().is_empty() {
            return Err(AppError::Validation("last_name cannot be empty".into()));
        }
        member.last_name = last_name;
    }
    if payload.birth_year.is_some() { member.birth_year = payload.birth_year; }
    if payload.gender.is_some() { member.gender = payload.gender; }
    if payload.email.is_some() { member.email = payload.email; }
    if payload.phone_e164.is_some() { member.phone_e164 = payload.phone_e164; }
    if payload.relationship_other.is_some() { member.relationship_other = payload.relationship_other; }
    if payload.occupation.is_some() { member.occupation = payload.occupation; }
    if payload.business_info.is_some() { member.business_info = payload.business_info; }

    // The "self" record mirrors the account; its relationship cannot change.
    if let Some(relationship) = payload.relationship {
        if member.is_main_user() && relationship != member.relationship {
            return Err(AppError::Validation("Cannot change the relationship of your own record".into()));
        }
        member.relationship = relationship;
    }

    let updated = if member.is_main_user() {
        let mut account = state.user_repo.find_by_id(&user.user_id).await?
            .ok_or(AppError::NotFound("User not found".into()))?;
        account.first_name = member.first_name.clone();
        account.last_name = member.last_name.clone();
        if let Some(ref email) = member.email {
            account.email = email.clone();
        }
        account.phone_e164 = member.phone_e164.clone();
        state.family_repo.update_with_user_sync(&member, &account).await?
    } else {
        state.family_repo.update(&member).await?
    };

    info!("Family member updated: {}", updated.id);
    Ok(Json(json!({ "success": true, "family_member": updated })))
}

pub async fn delete_family_member(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(member_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let member = find_owned(&state, &member_id, &user.user_id).await?;

    if member.is_main_user() {
        return Err(AppError::Validation("Cannot delete your own record".into()));
    }

    state.family_repo.delete(&member.id).await?;
    info!("Family member deleted: {}", member.id);
    Ok(Json(json!({ "success": true, "message": "Family member deleted" })))
}

/// Records belonging to other accounts are reported as missing, not
/// forbidden, so ids cannot be probed.
async fn find_owned(
    state: &AppState,
    member_id: &str,
    user_id: &str,
) -> Result<FamilyMember, AppError> {
    let member = state.family_repo.find_by_id(member_id).await?
        .ok_or(AppError::NotFound("Family member not found".into()))?;
    if member.user_id != user_id {
        return Err(AppError::NotFound("Family member not found".into()));
    }
    Ok(member)
}
