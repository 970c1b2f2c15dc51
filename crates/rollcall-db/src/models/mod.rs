//! Database models - SQLx-compatible structs for PostgreSQL tables

mod attendance;
mod member;
mod role;
mod user;

pub use attendance::AttendanceModel;
pub use member::{MemberModel, MemberRoleNameModel};
pub use role::RoleModel;
pub use user::UserModel;
