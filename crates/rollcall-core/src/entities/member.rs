//! Member entity - a person tracked on the roster

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{MemberStatus, RecordId};

/// Roster member with the names of its assigned roles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: RecordId,
    pub name: String,
    pub status: MemberStatus,
    /// Role names, sorted
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated input for inserting a member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub name: String,
    pub status: MemberStatus,
}

impl NewMember {
    /// Build from raw input. The name is trimmed and must not end up empty.
    pub fn new(name: &str, status: MemberStatus) -> Result<Self, DomainError> {
        Ok(Self {
            name: member_name(name)?,
            status,
        })
    }
}

/// Partial update of a member. `None` leaves the field untouched;
/// `Some` role ids replace the whole role set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberChanges {
    pub name: Option<String>,
    pub status: Option<MemberStatus>,
    pub role_ids: Option<Vec<RecordId>>,
}

impl MemberChanges {
    /// Set a new name after trimming it
    pub fn with_name(mut self, name: &str) -> Result<Self, DomainError> {
        self.name = Some(member_name(name)?);
        Ok(self)
    }

    pub fn with_status(mut self, status: MemberStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_role_ids(mut self, role_ids: Vec<RecordId>) -> Self {
        self.role_ids = Some(role_ids);
        self
    }
}

fn member_name(raw: &str) -> Result<String, DomainError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(DomainError::validation("Name is required"));
    }
    Ok(name.to_string())
}
