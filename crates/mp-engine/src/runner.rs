//! Batch orchestration over the registry and an injected ledger.
//!
//! The Runner holds no mutable state across calls: the available set and
//! the executed set are recomputed fresh on every invocation. Execution
//! within a call is strictly sequential - later migrations may depend on
//! state left by earlier ones, so the loop must not be parallelized or
//! reordered.

use crate::error::{EngineError, EngineResult};
use crate::migration::Migration;
use crate::registry::MigrationRegistry;
use mp_core::{
    AppliedPolicy, MigrationInfo, MigrationOutcome, MigrationStatus, RollbackReport, RunReport,
    StatusReport, Version,
};
use mp_db::Database;
use mp_ledger::Ledger;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

/// Migration runner: computes the pending set and applies it in order.
///
/// Single-writer model: exactly one process at a time is expected to drive
/// a given ledger. Callers needing cross-process exclusion must serialize
/// externally; the engine does not take a distributed lock.
pub struct Runner {
    registry: MigrationRegistry,
    db: Arc<dyn Database>,
    ledger: Arc<dyn Ledger>,
    policy: AppliedPolicy,
}

impl Runner {
    /// Create a runner over a registry, application database, and ledger.
    pub fn new(
        registry: MigrationRegistry,
        db: Arc<dyn Database>,
        ledger: Arc<dyn Ledger>,
        policy: AppliedPolicy,
    ) -> Self {
        Self {
            registry,
            db,
            ledger,
            policy,
        }
    }

    /// Apply all pending migrations in ascending version order, halting at
    /// the first failure.
    ///
    /// An individual migration's failure never surfaces as an `Err`: it is
    /// recorded in the ledger (best-effort) and reported through the
    /// returned [`RunReport`]. Only ledger access outside that
    /// failure-recording path propagates.
    pub async fn run(&self) -> EngineResult<RunReport> {
        let pending = self.pending_migrations().await?;
        let mut report = RunReport::new(pending.len());

        if pending.is_empty() {
            log::debug!("No pending migrations");
            return Ok(report);
        }

        for migration in pending {
            log::debug!("Applying migration {} [{}]", migration.version(), report.run_id);
            let started = Instant::now();

            match (migration.up)(self.db.as_ref()).await {
                Ok(()) => {
                    let elapsed = started.elapsed().as_millis() as u64;
                    // A write failure here must halt the batch: without a
                    // durable completed record the next run would re-apply
                    // this migration.
                    self.ledger
                        .record_outcome(
                            migration.version(),
                            migration.name(),
                            migration.description(),
                            MigrationStatus::Completed,
                            elapsed,
                        )
                        .await?;
                    report.results.push(success_outcome(migration, elapsed));
                    report.migrations_run += 1;
                }
                Err(e) => {
                    let elapsed = started.elapsed().as_millis() as u64;
                    // Best-effort: the write error must never replace the
                    // execution error being recorded.
                    if let Err(write_err) = self
                        .ledger
                        .record_outcome(
                            migration.version(),
                            migration.name(),
                            migration.description(),
                            MigrationStatus::Failed,
                            elapsed,
                        )
                        .await
                    {
                        log::error!(
                            "Failed to record failure of {} in ledger: {write_err}",
                            migration.version()
                        );
                    }
                    report
                        .results
                        .push(failure_outcome(migration, elapsed, e.to_string()));
                    break;
                }
            }
        }
        Ok(report)
    }

    /// Roll back a single version via its descriptor's reverse procedure.
    ///
    /// Never cascades: entries for other versions are untouched. Ordering
    /// discipline for multi-version rollback is the caller's
    /// responsibility.
    pub async fn rollback(&self, version: &str) -> EngineResult<RollbackReport> {
        let Some(migration) = self.registry.find(version) else {
            return Err(EngineError::NotFound {
                version: version.to_string(),
            });
        };
        let Some(down) = migration.down.as_ref() else {
            return Err(EngineError::Irreversible {
                version: version.to_string(),
            });
        };

        log::debug!("Rolling back migration {}", migration.version());
        let started = Instant::now();
        match down(self.db.as_ref()).await {
            Ok(()) => {
                let elapsed = started.elapsed().as_millis() as u64;
                self.ledger
                    .record_outcome(
                        migration.version(),
                        migration.name(),
                        migration.description(),
                        MigrationStatus::RolledBack,
                        elapsed,
                    )
                    .await?;
                Ok(RollbackReport {
                    version: migration.version().clone(),
                    execution_time_ms: elapsed,
                })
            }
            Err(e) => {
                let elapsed = started.elapsed().as_millis() as u64;
                // A half-applied reverse procedure leaves the version in an
                // indeterminate state; mark it failed so it surfaces for
                // operator attention.
                if let Err(write_err) = self
                    .ledger
                    .record_outcome(
                        migration.version(),
                        migration.name(),
                        migration.description(),
                        MigrationStatus::Failed,
                        elapsed,
                    )
                    .await
                {
                    log::error!(
                        "Failed to record rollback failure of {} in ledger: {write_err}",
                        migration.version()
                    );
                }
                Err(EngineError::Execution {
                    version: version.to_string(),
                    source: e,
                })
            }
        }
    }

    /// Aggregate status over the available set and the full ledger.
    pub async fn status(&self) -> EngineResult<StatusReport> {
        let available = self.registry.discover();
        let executed = self.ledger.list_executed().await?;

        let applied = applied_set(&executed, self.policy);
        let executed_count = available
            .iter()
            .filter(|m| applied.contains(m.version()))
            .count();

        Ok(StatusReport {
            total: available.len(),
            executed: executed_count,
            pending: available.len() - executed_count,
            failed: count_status(&executed, MigrationStatus::Failed),
            rolled_back: count_status(&executed, MigrationStatus::RolledBack),
            available_migrations: available
                .iter()
                .map(|m| MigrationInfo {
                    version: m.version().clone(),
                    name: m.name().to_string(),
                    description: m.description().to_string(),
                    reversible: m.is_reversible(),
                })
                .collect(),
            executed_migrations: executed,
        })
    }

    /// Available descriptors not counted as applied, ascending by version.
    async fn pending_migrations(&self) -> EngineResult<Vec<&Migration>> {
        let executed = self.ledger.list_executed().await?;
        let applied = applied_set(&executed, self.policy);
        Ok(self
            .registry
            .discover()
            .into_iter()
            .filter(|m| !applied.contains(m.version()))
            .collect())
    }
}

fn applied_set(executed: &[mp_core::LedgerEntry], policy: AppliedPolicy) -> HashSet<Version> {
    executed
        .iter()
        .filter(|e| policy.counts_as_applied(e.status))
        .map(|e| e.version.clone())
        .collect()
}

fn count_status(executed: &[mp_core::LedgerEntry], status: MigrationStatus) -> usize {
    executed.iter().filter(|e| e.status == status).count()
}

fn success_outcome(migration: &Migration, elapsed: u64) -> MigrationOutcome {
    MigrationOutcome {
        version: migration.version().clone(),
        name: migration.name().to_string(),
        success: true,
        execution_time_ms: elapsed,
        error: None,
    }
}

fn failure_outcome(migration: &Migration, elapsed: u64, error: String) -> MigrationOutcome {
    MigrationOutcome {
        version: migration.version().clone(),
        name: migration.name().to_string(),
        success: false,
        execution_time_ms: elapsed,
        error: Some(error),
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
