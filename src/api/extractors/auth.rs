use axum::{
    extract::FromRequestParts,
    http::request::Parts,
};
use crate::domain::models::user::ROLE_MODERATOR;
use crate::error::AppError;
use tower_cookies::Cookies;
use tracing::Span;

/// Identity from the session cookies set by the auth frontend. The backend
/// does not issue credentials; it trusts `user_id` / `user_role` the same
/// way the request-scoped session did upstream.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
    pub role: i32,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let cookies = parts.extensions.get::<Cookies>()
            .ok_or(AppError::Internal)?;

        let user_id = cookies.get("user_id")
            .ok_or(AppError::Unauthorized)?
            .value()
            .to_string();

        let role: i32 = cookies.get("user_role")
            .ok_or(AppError::Unauthorized)?
            .value()
            .parse()
            .map_err(|_| AppError::Unauthorized)?;

        Span::current().record("user_id", user_id.as_str());

        Ok(AuthUser { user_id, role })
    }
}

/// Moderator-or-above gate for the admin endpoints.
pub struct AdminUser(pub AuthUser);

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        if user.role < ROLE_MODERATOR {
            return Err(AppError::Forbidden("Admin access required".into()));
        }

        Ok(AdminUser(user))
    }
}
