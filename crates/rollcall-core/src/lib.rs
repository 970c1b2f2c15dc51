//! # rollcall-core
//!
//! Domain layer containing entities, value objects and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{AttendanceEntry, AttendanceRecord, Member, MemberChanges, NewMember, Role, User};
pub use error::DomainError;
pub use traits::{
    AttendanceRepository, MemberRepository, RepoResult, RoleRepository, UserRepository,
};
pub use value_objects::{
    parse_attendance_date, MemberStatus, Presence, RecordId, RecordIdParseError,
    ATTENDANCE_DATE_FORMAT,
};
