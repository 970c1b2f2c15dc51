//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of a
//! request and talks to storage only through the repository traits.

pub mod attendance;
pub mod auth;
pub mod context;
pub mod error;
pub mod roster;

pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use roster::RosterService;
