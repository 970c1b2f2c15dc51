//! Domain entities - core business objects

mod attendance;
mod member;
mod role;
mod user;

pub use attendance::{AttendanceEntry, AttendanceRecord};
pub use member::{Member, MemberChanges, NewMember};
pub use role::Role;
pub use user::User;
