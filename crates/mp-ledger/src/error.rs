//! Error types for the migration ledger.

use thiserror::Error;

/// Ledger storage errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Failed to open or create the ledger database (L001).
    #[error("[L001] Ledger connection failed: {0}")]
    ConnectionError(String),

    /// Bootstrap DDL failed on open (L002).
    #[error("[L002] Ledger bootstrap failed: {0}")]
    BootstrapError(String),

    /// An outcome could not be persisted (L003).
    #[error("[L003] Ledger write failed: {0}")]
    WriteError(String),

    /// A read query failed (L004).
    #[error("[L004] Ledger query failed: {0}")]
    QueryError(String),

    /// A stored row could not be decoded into an entry (L005).
    #[error("[L005] Corrupt ledger entry for version '{version}': {message}")]
    CorruptEntry { version: String, message: String },
}

/// Result type alias for [`LedgerError`].
pub type LedgerResult<T> = Result<T, LedgerError>;
