//! Attendance handlers

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use rollcall_service::dto::{AttendanceQuery, AttendanceResponse, MessageResponse, UpdateAttendanceRequest};
use rollcall_service::AttendanceService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Attendance of one day
///
/// GET /api/attendance?date=YYYY-MM-DD
pub async fn list_attendance(
    State(state): State<AppState>,
    _auth: AuthUser,
    query: Result<Query<AttendanceQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<AttendanceResponse>>> {
    let Query(query) = query.map_err(|e| ApiError::invalid_query(e.body_text()))?;
    let date = query
        .date
        .ok_or_else(|| ApiError::invalid_query("The date query parameter is required"))?;

    let service = AttendanceService::new(state.service_context());
    let records = service.list_attendance(&date).await?;
    Ok(Json(records))
}

/// Store a batch of entries for one day
///
/// PUT /api/attendance/{date}
pub async fn update_attendance(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(date): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateAttendanceRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AttendanceService::new(state.service_context());
    let response = service.update_attendance(&date, request).await?;
    Ok(Json(response))
}
