//! Ledger entry: the durable record of one migration attempt.

use crate::status::MigrationStatus;
use crate::version::Version;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One ledger record per version; later attempts overwrite via upsert.
///
/// The entry is created or updated only as a side effect of a Runner
/// operation, never directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique key; soft reference to the descriptor of the same version.
    pub version: Version,

    /// Name copied from the descriptor at the time of the attempt.
    pub name: String,

    /// Description copied from the descriptor at the time of the attempt.
    pub description: String,

    /// When the attempt finished.
    pub executed_at: DateTime<Utc>,

    /// How long the procedure ran, in milliseconds.
    pub execution_time_ms: u64,

    /// Outcome of the attempt.
    pub status: MigrationStatus,
}
