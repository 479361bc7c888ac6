//! Ledger trait definition

use crate::error::LedgerResult;
use async_trait::async_trait;
use mp_core::{LedgerEntry, MigrationStatus, Version};

/// Durable store of migration attempt records.
///
/// One record per version; `record_outcome` upserts by version. History is
/// append/overwrite only - no delete operation is exposed. The Runner takes
/// this as an injected trait object so tests can substitute
/// [`MemoryLedger`](crate::MemoryLedger).
#[async_trait]
pub trait Ledger: Send + Sync {
    /// All attempt records, ascending by version.
    async fn list_executed(&self) -> LedgerResult<Vec<LedgerEntry>>;

    /// Insert or overwrite the record for `version`, stamping the current
    /// time, and return the stored entry.
    async fn record_outcome(
        &self,
        version: &Version,
        name: &str,
        description: &str,
        status: MigrationStatus,
        execution_time_ms: u64,
    ) -> LedgerResult<LedgerEntry>;

    /// Look up the record for a single version.
    async fn find_by_version(&self, version: &Version) -> LedgerResult<Option<LedgerEntry>>;
}
