//! User handlers
//!
//! Registration is open; the profile route needs a token.

use axum::{extract::State, Json};
use rollcall_service::dto::{CreatedUserResponse, RegisterRequest, UserResponse};
use rollcall_service::AuthService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Get the authenticated user
///
/// GET /api/users/me
pub async fn get_current_user(auth: AuthUser) -> Json<UserResponse> {
    Json(UserResponse::from(auth.user))
}

/// Register a new user
///
/// POST /api/users
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<CreatedUserResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(response))
}
