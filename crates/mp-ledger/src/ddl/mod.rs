//! Embedded bootstrap DDL for the ledger database.
//!
//! The statements are idempotent (`IF NOT EXISTS`) and run on every open,
//! so a fresh file and an existing ledger take the same path.

/// Schema and table creation for the attempt-record store.
pub static BOOTSTRAP: &str = include_str!("v001_ledger.sql");
