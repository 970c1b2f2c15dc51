//! Member handlers
//!
//! Endpoints for roster management.

use axum::{extract::State, Json};
use rollcall_service::dto::{
    CreateMemberRequest, CreatedResponse, MemberResponse, MessageResponse, UpdateMemberRequest,
};
use rollcall_service::RosterService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List every member
///
/// GET /api/members
pub async fn list_members(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<MemberResponse>>> {
    let service = RosterService::new(state.service_context());
    let members = service.list_members().await?;
    Ok(Json(members))
}

/// Create a member
///
/// POST /api/members
pub async fn create_member(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateMemberRequest>,
) -> ApiResult<Created<CreatedResponse>> {
    let service = RosterService::new(state.service_context());
    let response = service.create_member(request).await?;
    Ok(Created(response))
}

/// Update a member
///
/// PUT /api/members/{id}
pub async fn update_member(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(member_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateMemberRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = RosterService::new(state.service_context());
    let response = service.update_member(member_id, request).await?;
    Ok(Json(response))
}
