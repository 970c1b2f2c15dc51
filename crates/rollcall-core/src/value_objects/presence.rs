//! Presence codes recorded per member per day

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Calendar date format accepted in attendance routes
pub const ATTENDANCE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Attendance code for one member on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Presence {
    /// Present
    P,
    /// Absent
    F,
    /// Justified absence
    FJ,
}

impl Presence {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::P => "P",
            Self::F => "F",
            Self::FJ => "FJ",
        }
    }
}

/// Parse an attendance date in exactly `YYYY-MM-DD` form
///
/// chrono alone accepts unpadded fields and a leading sign, so the shape is
/// checked first and each day has a single spelling.
pub fn parse_attendance_date(raw: &str) -> Result<NaiveDate, DomainError> {
    let bytes = raw.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(DomainError::InvalidDateFormat(raw.to_string()));
    }

    NaiveDate::parse_from_str(raw, ATTENDANCE_DATE_FORMAT)
        .map_err(|_| DomainError::InvalidDateFormat(raw.to_string()))
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Presence {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P" => Ok(Self::P),
            "F" => Ok(Self::F),
            "FJ" => Ok(Self::FJ),
            other => Err(DomainError::InvalidPresence(other.to_string())),
        }
    }
}
