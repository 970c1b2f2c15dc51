//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs (camelCase, ids as strings)
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    AttendanceEntryRequest, AttendanceQuery, CreateMemberRequest, LoginRequest, RegisterRequest,
    UpdateAttendanceRequest, UpdateMemberRequest,
};

pub use responses::{
    AttendanceResponse, CreatedResponse, CreatedUserResponse, HealthChecks, HealthResponse,
    LoginResponse, MemberResponse, MessageResponse, ReadinessResponse, UserResponse,
};
