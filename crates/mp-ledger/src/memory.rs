//! In-memory ledger implementation.
//!
//! Backs unit tests and ephemeral runs; same upsert semantics as the
//! DuckDB backend, keyed on the version's total order via `BTreeMap`.

use crate::error::LedgerResult;
use crate::traits::Ledger;
use async_trait::async_trait;
use chrono::Utc;
use mp_core::{LedgerEntry, MigrationStatus, Version};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Ledger held entirely in memory.
#[derive(Default)]
pub struct MemoryLedger {
    entries: Mutex<BTreeMap<Version, LedgerEntry>>,
}

impl MemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Ledger for MemoryLedger {
    async fn list_executed(&self) -> LedgerResult<Vec<LedgerEntry>> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.values().cloned().collect())
    }

    async fn record_outcome(
        &self,
        version: &Version,
        name: &str,
        description: &str,
        status: MigrationStatus,
        execution_time_ms: u64,
    ) -> LedgerResult<LedgerEntry> {
        let entry = LedgerEntry {
            version: version.clone(),
            name: name.to_string(),
            description: description.to_string(),
            executed_at: Utc::now(),
            execution_time_ms,
            status,
        };
        let mut entries = self.entries.lock().unwrap();
        entries.insert(version.clone(), entry.clone());
        Ok(entry)
    }

    async fn find_by_version(&self, version: &Version) -> LedgerResult<Option<LedgerEntry>> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.get(version).cloned())
    }
}
