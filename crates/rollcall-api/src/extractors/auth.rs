//! Authentication extractor
//!
//! Reads the bearer token, validates it and loads the user it was issued to.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use rollcall_common::AppError;
use rollcall_core::entities::User;
use rollcall_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user resolved from the JWT token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Absent header, another scheme and an empty token all count as missing
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::App(AppError::MissingAuth))?;

        if bearer.token().trim().is_empty() {
            return Err(ApiError::App(AppError::MissingAuth));
        }

        let app_state = AppState::from_ref(state);
        let user = AuthService::new(app_state.service_context())
            .validate_token(bearer.token())
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Rejected bearer token");
                ApiError::Service(e)
            })?;

        Ok(AuthUser { user })
    }
}
