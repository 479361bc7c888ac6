//! Applied-set policy: which ledger statuses count as "already executed".
//!
//! `completed` and `rolled_back` always count as applied. A rolled-back
//! version must not be silently re-applied by the next batch run; re-running
//! it is an operator decision. The policies differ only on `failed` entries.

use crate::status::MigrationStatus;
use serde::{Deserialize, Serialize};

/// How `failed` ledger entries affect the pending-set computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppliedPolicy {
    /// A failed version stays pending and is retried on the next run.
    #[default]
    Retry,
    /// A failed version counts as applied and blocks until an operator
    /// edits the ledger.
    Block,
}

impl AppliedPolicy {
    /// Whether an entry with `status` counts as applied under this policy.
    pub fn counts_as_applied(&self, status: MigrationStatus) -> bool {
        match status {
            MigrationStatus::Completed | MigrationStatus::RolledBack => true,
            MigrationStatus::Failed => matches!(self, AppliedPolicy::Block),
        }
    }
}
