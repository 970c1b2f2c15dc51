//! Test fixtures and data generators

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique suffix for test data; stable within a process, distinct across runs
pub fn unique_suffix() -> String {
    format!(
        "{}{}",
        Utc::now().timestamp_micros(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    )
}

/// A date in the distant past that no other test run writes to
pub fn unique_date() -> NaiveDate {
    let offset = (Utc::now().timestamp_micros() as u64 + COUNTER.fetch_add(1, Ordering::SeqCst)) % 30_000;
    NaiveDate::from_ymd_opt(1900, 1, 1).expect("valid date") + Days::new(offset)
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Tester {suffix}"),
            email: format!("tester{suffix}@example.com"),
            password: "senha-segura-123".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CreateMemberRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub roles: Vec<String>,
}

impl CreateMemberRequest {
    pub fn unique(roles: &[&str]) -> Self {
        Self {
            name: format!("Membro {}", unique_suffix()),
            status: None,
            roles: roles.iter().map(|r| (*r).to_string()).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub id: String,
    pub name: String,
    pub roles: Vec<String>,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceResponse {
    pub member_id: String,
    pub presence: String,
    pub observation: String,
}
