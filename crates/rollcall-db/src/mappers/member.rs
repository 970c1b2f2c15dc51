//! Member model -> entity mapper

use std::collections::HashMap;

use rollcall_core::entities::Member;
use rollcall_core::error::DomainError;
use rollcall_core::value_objects::RecordId;

use crate::models::{MemberModel, MemberRoleNameModel};

/// Combine a member row with its role names
pub fn member_with_roles(model: MemberModel, roles: Vec<String>) -> Result<Member, DomainError> {
    let status = model.status.parse().map_err(|_| {
        DomainError::DatabaseError(format!(
            "member {} has unknown status {:?}",
            model.id, model.status
        ))
    })?;

    Ok(Member {
        id: RecordId::new(model.id),
        name: model.name,
        status,
        roles,
        created_at: model.created_at,
    })
}

/// Group role-name rows by member id, keeping the row order within each member
pub fn group_role_names(rows: Vec<MemberRoleNameModel>) -> HashMap<i64, Vec<String>> {
    let mut grouped: HashMap<i64, Vec<String>> = HashMap::new();
    for row in rows {
        grouped.entry(row.member_id).or_default().push(row.role_name);
    }
    grouped
}
