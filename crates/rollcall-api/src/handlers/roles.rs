//! Role handlers

use axum::{extract::State, Json};
use rollcall_service::RosterService;

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Role names ordered by name
///
/// GET /api/roles
pub async fn list_roles(State(state): State<AppState>, _auth: AuthUser) -> ApiResult<Json<Vec<String>>> {
    let service = RosterService::new(state.service_context());
    let roles = service.list_roles().await?;
    Ok(Json(roles))
}
