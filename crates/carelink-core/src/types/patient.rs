//! Patient record as served by the data layer

use serde::{Deserialize, Serialize};

/// A patient known to the care team. Read-only on the messaging page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub full_name: String,
}

impl Patient {
    pub fn new(id: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
        }
    }

    /// Case-insensitive substring match on the full name.
    ///
    /// An empty needle matches every patient.
    pub fn name_matches(&self, needle: &str) -> bool {
        self.full_name
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}
