//! User model -> entity mapper

use rollcall_core::entities::User;
use rollcall_core::value_objects::RecordId;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: RecordId::new(model.id),
            name: model.name,
            email: model.email,
            created_at: model.created_at,
        }
    }
}
