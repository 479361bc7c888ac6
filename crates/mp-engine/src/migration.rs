//! Migration descriptor: a versioned, named unit of change.

use futures::future::BoxFuture;
use mp_core::{CoreResult, Version};
use mp_db::{Database, DbResult};

/// Boxed asynchronous migration procedure.
///
/// Receives the application database handle; the returned future borrows it
/// for the duration of the call.
pub type MigrationStep =
    Box<dyn for<'a> Fn(&'a dyn Database) -> BoxFuture<'a, DbResult<()>> + Send + Sync>;

/// A passive descriptor: version, metadata, forward procedure, optional
/// reverse procedure. Defined statically at build time and immutable once
/// registered.
pub struct Migration {
    pub(crate) version: Version,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) up: MigrationStep,
    pub(crate) down: Option<MigrationStep>,
}

impl Migration {
    /// Create a descriptor with an arbitrary forward procedure.
    ///
    /// Fails if `version` does not follow the leading-ordinal convention;
    /// the registry skips such units at discovery rather than aborting.
    pub fn new(
        version: &str,
        name: impl Into<String>,
        description: impl Into<String>,
        up: MigrationStep,
    ) -> CoreResult<Self> {
        Ok(Self {
            version: Version::parse(version)?,
            name: name.into(),
            description: description.into(),
            up,
            down: None,
        })
    }

    /// Create a descriptor whose forward procedure executes a SQL batch.
    pub fn up_sql(
        version: &str,
        name: impl Into<String>,
        description: impl Into<String>,
        sql: impl Into<String>,
    ) -> CoreResult<Self> {
        Self::new(version, name, description, sql_step(sql.into()))
    }

    /// Attach a reverse procedure.
    pub fn with_down(mut self, down: MigrationStep) -> Self {
        self.down = Some(down);
        self
    }

    /// Attach a reverse procedure that executes a SQL batch.
    pub fn with_down_sql(self, sql: impl Into<String>) -> Self {
        self.with_down(sql_step(sql.into()))
    }

    /// The descriptor's version identifier.
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Human-readable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the descriptor carries a reverse procedure.
    pub fn is_reversible(&self) -> bool {
        self.down.is_some()
    }
}

impl std::fmt::Debug for Migration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Migration")
            .field("version", &self.version)
            .field("name", &self.name)
            .field("reversible", &self.is_reversible())
            .finish_non_exhaustive()
    }
}

fn sql_step(sql: String) -> MigrationStep {
    Box::new(move |db: &dyn Database| {
        let sql = sql.clone();
        Box::pin(async move { db.execute_batch(&sql).await })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_version() {
        let result = Migration::up_sql("bad-version", "x", "", "SELECT 1");
        assert!(result.is_err());
    }

    #[test]
    fn reversibility_reflects_down() {
        let forward_only = Migration::up_sql("001_a", "a", "", "SELECT 1").unwrap();
        assert!(!forward_only.is_reversible());

        let reversible = Migration::up_sql("002_b", "b", "", "SELECT 1")
            .unwrap()
            .with_down_sql("SELECT 1");
        assert!(reversible.is_reversible());
    }
}
