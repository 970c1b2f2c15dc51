//! Member status - whether a member currently attends

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Attendance standing of a roster member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    /// Attends regularly
    #[default]
    Frequente,
    /// Stepped away
    Afastado,
    /// On leave
    Licenca,
}

impl MemberStatus {
    pub const ALL: [MemberStatus; 3] = [Self::Frequente, Self::Afastado, Self::Licenca];

    /// Wire and storage representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Frequente => "frequente",
            Self::Afastado => "afastado",
            Self::Licenca => "licenca",
        }
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemberStatus {
    type Err = DomainError;

    /// Parses the exact lowercase label; anything else is `InvalidStatus`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::InvalidStatus(s.to_string()))
    }
}
