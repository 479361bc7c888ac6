//! mp-db - Database abstraction layer for Milepost
//!
//! Provides the [`Database`] trait migration procedures are written against
//! and the DuckDB backend used by the content store.

pub mod duckdb;
pub mod error;
pub mod traits;

pub use crate::duckdb::DuckDbBackend;
pub use error::{DbError, DbResult};
pub use traits::Database;
