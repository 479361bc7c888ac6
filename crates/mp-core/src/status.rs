//! Migration outcome status recorded in the ledger.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// Terminal status of a migration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrationStatus {
    /// Forward procedure ran to completion
    Completed,
    /// Forward or reverse procedure raised an error
    Failed,
    /// Reverse procedure ran to completion
    RolledBack,
}

impl MigrationStatus {
    /// Stable string form, used for ledger storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            MigrationStatus::Completed => "completed",
            MigrationStatus::Failed => "failed",
            MigrationStatus::RolledBack => "rolled_back",
        }
    }
}

impl std::str::FromStr for MigrationStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(MigrationStatus::Completed),
            "failed" => Ok(MigrationStatus::Failed),
            "rolled_back" => Ok(MigrationStatus::RolledBack),
            other => Err(CoreError::InvalidStatus {
                raw: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for MigrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
