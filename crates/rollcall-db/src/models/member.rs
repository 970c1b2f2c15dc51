//! Member database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for members table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// One role name attached to a member (roles_members joined with roles)
#[derive(Debug, Clone, FromRow)]
pub struct MemberRoleNameModel {
    pub member_id: i64,
    pub role_name: String,
}
