//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use rollcall_core::entities::{AttendanceRecord, Member, User};

use super::responses::{AttendanceResponse, MemberResponse, UserResponse};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
            roles: member.roles,
            status: member.status,
            created_at: member.created_at,
        }
    }
}

impl From<AttendanceRecord> for AttendanceResponse {
    fn from(record: AttendanceRecord) -> Self {
        Self {
            member_id: record.member_id,
            presence: record.presence,
            observation: record.observation.unwrap_or_default(),
        }
    }
}
