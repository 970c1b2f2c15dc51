//! User entity - an account allowed to operate the roster

use chrono::{DateTime, Utc};

use crate::value_objects::RecordId;

/// Registered account. The password hash is kept out of the entity
/// and only fetched when credentials are checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: RecordId, name: String, email: String) -> Self {
        Self {
            id,
            name,
            email,
            created_at: Utc::now(),
        }
    }
}
