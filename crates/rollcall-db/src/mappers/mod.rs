//! Model to entity mappers
//!
//! Conversions from database rows to domain objects. Columns holding
//! enumerated values are parsed back into their value objects; a value
//! outside the allowed set is reported as a database error.

mod attendance;
mod member;
mod role;
mod user;

pub use member::{group_role_names, member_with_roles};
