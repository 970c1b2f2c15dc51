//! Attendance entities - one record per member per day

use chrono::NaiveDate;

use crate::value_objects::{Presence, RecordId};

/// Stored attendance for (member, date)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub member_id: RecordId,
    pub date: NaiveDate,
    pub presence: Presence,
    pub observation: Option<String>,
}

/// One validated line of an attendance batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceEntry {
    pub member_id: RecordId,
    pub presence: Presence,
    pub observation: Option<String>,
}

impl AttendanceEntry {
    pub fn new(member_id: RecordId, presence: Presence, observation: Option<String>) -> Self {
        Self {
            member_id,
            presence,
            observation,
        }
    }

    /// Attach the batch date to produce the record that will be stored
    pub fn into_record(self, date: NaiveDate) -> AttendanceRecord {
        AttendanceRecord {
            member_id: self.member_id,
            date,
            presence: self.presence,
            observation: self.observation,
        }
    }
}
