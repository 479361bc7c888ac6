//! DuckDB-backed ledger implementation.
//!
//! [`DuckDbLedger`] owns a DuckDB connection and stores one row per version
//! in `mp_ledger.migrations`, bootstrapping the schema on open.

use crate::ddl::BOOTSTRAP;
use crate::error::{LedgerError, LedgerResult};
use crate::traits::Ledger;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use duckdb::Connection;
use mp_core::{LedgerEntry, MigrationStatus, Version};
use std::path::Path;
use std::sync::Mutex;

/// Columns selected for every entry read, in [`parse_entry`] order.
const ENTRY_COLUMNS: &str =
    "version, name, description, executed_at, execution_time_ms, status";

/// DuckDB ledger backend.
pub struct DuckDbLedger {
    conn: Mutex<Connection>,
}

impl DuckDbLedger {
    /// Open (or create) the ledger at `path` and run the bootstrap DDL.
    pub fn open(path: &Path) -> LedgerResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| LedgerError::ConnectionError(format!("{e}: {}", path.display())))?;
        bootstrap(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory ledger with the schema bootstrapped.
    pub fn open_memory() -> LedgerResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| LedgerError::ConnectionError(e.to_string()))?;
        bootstrap(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open from a path string (handles `:memory:` special case).
    pub fn new(path: &str) -> LedgerResult<Self> {
        if path == ":memory:" {
            Self::open_memory()
        } else {
            Self::open(Path::new(path))
        }
    }
}

fn bootstrap(conn: &Connection) -> LedgerResult<()> {
    log::debug!("Bootstrapping ledger schema");
    conn.execute_batch(BOOTSTRAP)
        .map_err(|e| LedgerError::BootstrapError(e.to_string()))
}

/// Raw column values of one stored row, in `ENTRY_COLUMNS` order.
type RawEntry = (String, String, String, String, i64, String);

fn read_raw(row: &duckdb::Row<'_>) -> Result<RawEntry, duckdb::Error> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
    ))
}

fn parse_entry(raw: RawEntry) -> LedgerResult<LedgerEntry> {
    let (version, name, description, executed_at, execution_time_ms, status) = raw;
    let corrupt = |message: String| LedgerError::CorruptEntry {
        version: version.clone(),
        message,
    };
    Ok(LedgerEntry {
        version: Version::parse(version.as_str()).map_err(|e| corrupt(e.to_string()))?,
        name,
        description,
        executed_at: DateTime::parse_from_rfc3339(&executed_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| corrupt(format!("bad executed_at '{executed_at}': {e}")))?,
        execution_time_ms: u64::try_from(execution_time_ms)
            .map_err(|_| corrupt(format!("negative execution_time_ms {execution_time_ms}")))?,
        status: status
            .parse::<MigrationStatus>()
            .map_err(|e| corrupt(e.to_string()))?,
    })
}

#[async_trait]
impl Ledger for DuckDbLedger {
    async fn list_executed(&self) -> LedgerResult<Vec<LedgerEntry>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {ENTRY_COLUMNS} FROM mp_ledger.migrations"
            ))
            .map_err(|e| LedgerError::QueryError(e.to_string()))?;

        let raw_rows: Vec<RawEntry> = stmt
            .query_map([], read_raw)
            .map_err(|e| LedgerError::QueryError(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| LedgerError::QueryError(format!("row error: {e}")))?;

        let mut entries = raw_rows
            .into_iter()
            .map(parse_entry)
            .collect::<LedgerResult<Vec<_>>>()?;
        // Versions order by ordinal, not lexicographically, so sort here
        // rather than in SQL.
        entries.sort_by(|a, b| a.version.cmp(&b.version));
        Ok(entries)
    }

    async fn record_outcome(
        &self,
        version: &Version,
        name: &str,
        description: &str,
        status: MigrationStatus,
        execution_time_ms: u64,
    ) -> LedgerResult<LedgerEntry> {
        let executed_at = Utc::now();
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO mp_ledger.migrations
                 (version, name, description, executed_at, execution_time_ms, status)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT (version) DO UPDATE SET
                 name = excluded.name,
                 description = excluded.description,
                 executed_at = excluded.executed_at,
                 execution_time_ms = excluded.execution_time_ms,
                 status = excluded.status",
            duckdb::params![
                version.as_str(),
                name,
                description,
                executed_at.to_rfc3339(),
                execution_time_ms as i64,
                status.as_str(),
            ],
        )
        .map_err(|e| LedgerError::WriteError(format!("{}: {e}", version)))?;

        Ok(LedgerEntry {
            version: version.clone(),
            name: name.to_string(),
            description: description.to_string(),
            executed_at,
            execution_time_ms,
            status,
        })
    }

    async fn find_by_version(&self, version: &Version) -> LedgerResult<Option<LedgerEntry>> {
        let conn = self.conn.lock().unwrap();
        let raw = conn.query_row(
            &format!("SELECT {ENTRY_COLUMNS} FROM mp_ledger.migrations WHERE version = ?"),
            duckdb::params![version.as_str()],
            read_raw,
        );
        match raw {
            Ok(raw) => Ok(Some(parse_entry(raw)?)),
            Err(duckdb::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(LedgerError::QueryError(e.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "duckdb_test.rs"]
mod tests;
