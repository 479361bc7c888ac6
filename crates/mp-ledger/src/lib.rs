//! mp-ledger - Migration ledger for Milepost
//!
//! Durable record of which migration versions have been attempted and their
//! outcome. The [`Ledger`] trait is the seam the Runner is injected with;
//! [`DuckDbLedger`] is the production backend and [`MemoryLedger`] the
//! in-memory double.

pub mod ddl;
pub mod duckdb;
pub mod error;
pub mod memory;
pub mod traits;

pub use crate::duckdb::DuckDbLedger;
pub use error::{LedgerError, LedgerResult};
pub use memory::MemoryLedger;
pub use traits::Ledger;
