//! Registered migration set for the content store.
//!
//! Each numbered module defines one descriptor; [`all`] lists them in
//! registration order (the registry re-sorts by version either way). To add
//! a migration, create the next `mNNN_*.rs` module and list it here.

use mp_core::CoreResult;
use mp_engine::{Migration, MigrationRegistry};

mod m001_initial_content;
mod m002_default_pages;
mod m003_service_catalog;
mod m004_order_ledger;

/// Every migration shipped with this deployment.
pub fn all() -> Vec<CoreResult<Migration>> {
    vec![
        m001_initial_content::migration(),
        m002_default_pages::migration(),
        m003_service_catalog::migration(),
        m004_order_ledger::migration(),
    ]
}

/// Build the registry the runner executes against.
pub fn registry() -> MigrationRegistry {
    MigrationRegistry::from_iter(all())
}
