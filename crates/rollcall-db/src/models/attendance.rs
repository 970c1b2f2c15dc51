//! Attendance database model

use chrono::NaiveDate;
use sqlx::FromRow;

/// Database model for attendance table
#[derive(Debug, Clone, FromRow)]
pub struct AttendanceModel {
    pub member_id: i64,
    pub date: NaiveDate,
    pub presence: String,
    pub observation: Option<String>,
}
