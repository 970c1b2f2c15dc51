//! Role model -> entity mapper

use rollcall_core::entities::Role;
use rollcall_core::value_objects::RecordId;

use crate::models::RoleModel;

impl From<RoleModel> for Role {
    fn from(model: RoleModel) -> Self {
        Role::new(RecordId::new(model.id), model.name)
    }
}
