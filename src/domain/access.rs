//! Access levels and verified principals

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered privilege tier of an account
///
/// Authorization is always "at least this level", so the declaration order
/// below is the total order.
///
/// # Examples
///
/// ```
/// use keeper::domain::AccessLevel;
///
/// assert!(AccessLevel::SuperAdmin >= AccessLevel::Supervisor);
/// assert!(AccessLevel::Admin < AccessLevel::Supervisor);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    #[default]
    Guest,
    Admin,
    Supervisor,
    SuperAdmin,
}

impl AccessLevel {
    pub const ALL: [AccessLevel; 4] = [
        AccessLevel::Guest,
        AccessLevel::Admin,
        AccessLevel::Supervisor,
        AccessLevel::SuperAdmin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Guest => "guest",
            AccessLevel::Admin => "admin",
            AccessLevel::Supervisor => "supervisor",
            AccessLevel::SuperAdmin => "superadmin",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(&['_', '-'][..], "");
        AccessLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| {
                format!(
                    "Invalid access level '{s}'. Must be one of: guest, admin, supervisor, superadmin"
                )
            })
    }
}

/// An identity whose secret has been verified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub identifier: String,
    pub access_level: AccessLevel,
}

impl Principal {
    pub fn new(identifier: impl Into<String>, access_level: AccessLevel) -> Self {
        Self {
            identifier: identifier.into(),
            access_level,
        }
    }

    /// True when the principal holds at least `required`
    pub fn has_permission(&self, required: AccessLevel) -> bool {
        self.access_level >= required
    }
}
