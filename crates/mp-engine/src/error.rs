//! Error types for the migration engine.

use mp_db::DbError;
use mp_ledger::LedgerError;
use thiserror::Error;

/// Engine errors.
///
/// A failing forward procedure inside a batch run is not an error here - it
/// is reported through the batch result. These variants cover the
/// single-operation calls (rollback, status) and ledger access outside a
/// failure-recording path.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Rollback requested for a version with no matching descriptor (R001).
    #[error("[R001] No migration found for version '{version}'")]
    NotFound { version: String },

    /// Rollback requested for a descriptor without a reverse procedure (R002).
    #[error("[R002] Migration '{version}' does not support rollback")]
    Irreversible { version: String },

    /// A reverse procedure failed (R003).
    #[error("[R003] Rollback of '{version}' failed")]
    Execution {
        version: String,
        #[source]
        source: DbError,
    },

    /// Ledger read or write failure (R004).
    #[error("[R004] Ledger operation failed")]
    Ledger(#[from] LedgerError),
}

/// Result type alias for [`EngineError`].
pub type EngineResult<T> = Result<T, EngineError>;
