//! Signed-in user and role

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CareError;

/// Role of the person viewing the page.
///
/// Unknown roles from the API deserialize to [`UserRole::Other`] so a new
/// backend role never breaks the page; such users get the patient layout
/// minus the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Patient,
    #[serde(other)]
    Other,
}

impl UserRole {
    pub fn is_admin(self) -> bool {
        self == UserRole::Admin
    }

    pub fn is_patient(self) -> bool {
        self == UserRole::Patient
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UserRole::Admin => "admin",
            UserRole::Patient => "patient",
            UserRole::Other => "other",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for UserRole {
    type Err = CareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "patient" => Ok(UserRole::Patient),
            "other" => Ok(UserRole::Other),
            other => Err(CareError::InvalidRole(other.to_string())),
        }
    }
}

/// The authenticated viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub role: UserRole,
}

impl User {
    pub fn new(id: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn is_patient(&self) -> bool {
        self.role.is_patient()
    }
}
