//! Request DTOs for API endpoints
//!
//! Shape checks (required fields, lengths) live here and run in the
//! `ValidatedJson` extractor. Rules that need trimming or the database
//! (blank names, allowed statuses, existing members) run in the services.

use rollcall_core::RecordId;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 120, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 254, message = "Email is required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 128, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// Member Requests
// ============================================================================

/// Create member request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMemberRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,

    /// Defaults to `frequente`
    pub status: Option<String>,

    /// Role names; unknown names are ignored
    pub roles: Option<Vec<String>>,
}

/// Partial member update. Absent fields stay unchanged; `roles` replaces the set.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMemberRequest {
    #[validate(length(min = 1, max = 200, message = "Name cannot be empty"))]
    pub name: Option<String>,

    pub status: Option<String>,

    pub roles: Option<Vec<String>>,
}

// ============================================================================
// Attendance Requests
// ============================================================================

/// Query string of `GET /api/attendance`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttendanceQuery {
    pub date: Option<String>,
}

/// Body of `PUT /api/attendance/{date}`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAttendanceRequest {
    #[validate(nested)]
    pub entries: Vec<AttendanceEntryRequest>,
}

/// One line of an attendance batch
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntryRequest {
    pub member_id: RecordId,

    /// `P`, `F` or `FJ`; checked by the service so the error can name the entry
    #[validate(length(min = 1, message = "Presence is required"))]
    pub presence: String,

    #[serde(default)]
    pub observation: Option<String>,
}
