//! Statically registered migration set.
//!
//! Replaces filename-convention discovery with an explicit registry built at
//! initialization: descriptors are typed values, ordering comes from the
//! version field, and a malformed or duplicate unit is skipped with a
//! warning rather than failing registration of the rest.

use crate::migration::Migration;
use mp_core::CoreResult;

/// Ordered collection of migration descriptors.
#[derive(Debug, Default)]
pub struct MigrationRegistry {
    migrations: Vec<Migration>,
}

impl MigrationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one unit.
    ///
    /// A unit that failed construction (invalid version) or duplicates an
    /// already-registered version is logged and skipped; registration of
    /// the remaining units continues.
    pub fn register(&mut self, migration: CoreResult<Migration>) {
        let migration = match migration {
            Ok(m) => m,
            Err(e) => {
                log::warn!("Skipping malformed migration: {e}");
                return;
            }
        };
        if let Some(existing) = self.find(migration.version().as_str()) {
            log::warn!(
                "Skipping migration '{}': version already registered as '{}'",
                migration.version(),
                existing.name()
            );
            return;
        }
        self.migrations.push(migration);
    }

    /// Build a registry from an iterator of construction results.
    pub fn from_iter(iter: impl IntoIterator<Item = CoreResult<Migration>>) -> Self {
        let mut registry = Self::new();
        for migration in iter {
            registry.register(migration);
        }
        registry
    }

    /// All registered descriptors, ascending by version.
    ///
    /// Side-effect-free; recomputed on every call since descriptors are
    /// static.
    pub fn discover(&self) -> Vec<&Migration> {
        let mut ordered: Vec<&Migration> = self.migrations.iter().collect();
        ordered.sort_by(|a, b| a.version().cmp(b.version()));
        ordered
    }

    /// Look up a descriptor by its full version string.
    pub fn find(&self, version: &str) -> Option<&Migration> {
        self.migrations.iter().find(|m| *m.version() == version)
    }

    /// Number of registered descriptors.
    pub fn len(&self) -> usize {
        self.migrations.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.migrations.is_empty()
    }
}
