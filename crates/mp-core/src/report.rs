//! Result objects returned by Runner operations.

use crate::entry::LedgerEntry;
use crate::version::Version;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Outcome of a single migration within a batch run.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationOutcome {
    pub version: Version,
    pub name: String,
    pub success: bool,
    pub execution_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregate result of one `run()` call.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Short identifier for correlating log lines of one batch.
    pub run_id: String,

    /// When the batch started.
    pub started_at: DateTime<Utc>,

    /// Count of migrations that completed successfully in this call.
    pub migrations_run: usize,

    /// Size of the pending set at the start of the call.
    pub total_pending: usize,

    /// Per-migration outcomes, in execution order.
    pub results: Vec<MigrationOutcome>,
}

impl RunReport {
    /// Create an empty report for a batch over `total_pending` migrations.
    pub fn new(total_pending: usize) -> Self {
        Self {
            run_id: Uuid::new_v4().to_string()[..8].to_string(),
            started_at: Utc::now(),
            migrations_run: 0,
            total_pending,
            results: Vec::new(),
        }
    }

    /// Count of migrations that failed in this batch (0 or 1, since the
    /// batch halts at the first failure).
    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| !r.success).count()
    }
}

/// Result of a successful `rollback()` call.
#[derive(Debug, Clone, Serialize)]
pub struct RollbackReport {
    pub version: Version,
    pub execution_time_ms: u64,
}

/// A descriptor summary for status reporting.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationInfo {
    pub version: Version,
    pub name: String,
    pub description: String,
    /// Whether the descriptor carries a reverse procedure.
    pub reversible: bool,
}

/// Aggregate returned by `status()`. Pure read; never mutates the ledger.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    /// Count of available descriptors.
    pub total: usize,

    /// Count of available versions the applied-policy treats as executed.
    pub executed: usize,

    /// Count of available versions still pending (`total - executed`).
    pub pending: usize,

    /// Count of ledger entries currently in `failed` status.
    pub failed: usize,

    /// Count of ledger entries currently in `rolled_back` status.
    pub rolled_back: usize,

    /// All available descriptors, ascending by version.
    pub available_migrations: Vec<MigrationInfo>,

    /// All ledger entries, ascending by version.
    pub executed_migrations: Vec<LedgerEntry>,
}
