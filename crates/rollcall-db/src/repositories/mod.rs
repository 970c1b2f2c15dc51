//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in rollcall-core.

mod attendance;
mod error;
mod member;
mod role;
mod user;

pub use attendance::PgAttendanceRepository;
pub use member::PgMemberRepository;
pub use role::PgRoleRepository;
pub use user::PgUserRepository;
