//! Role entity - a label that can be attached to members

use crate::value_objects::RecordId;

/// Seeded reference data; never created through the API
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Role {
    pub id: RecordId,
    pub name: String,
}

impl Role {
    pub fn new(id: RecordId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
