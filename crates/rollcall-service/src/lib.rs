//! # rollcall-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use services::{
    AttendanceService, AuthService, RosterService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
