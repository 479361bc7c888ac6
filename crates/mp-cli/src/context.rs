//! Runtime context for CLI commands

use anyhow::{Context, Result};
use mp_core::Config;
use mp_db::{Database, DuckDbBackend};
use mp_engine::Runner;
use mp_ledger::{DuckDbLedger, Ledger};
use std::path::Path;
use std::sync::Arc;

use crate::cli::GlobalArgs;
use crate::migrations;

/// Runtime context containing loaded config and open connections
pub struct RuntimeContext {
    /// The loaded project configuration
    pub config: Config,

    /// Application database connection
    pub db: Arc<dyn Database>,

    /// Migration ledger connection
    pub ledger: Arc<dyn Ledger>,

    /// Verbose output enabled
    pub verbose: bool,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments
    pub async fn new(args: &GlobalArgs) -> Result<Self> {
        let project_dir = Path::new(&args.project_dir);

        let config = if let Some(config_path) = &args.config {
            Config::load(Path::new(config_path)).context("Failed to load configuration file")?
        } else {
            Config::load_from_dir(project_dir).context("Failed to load project configuration")?
        };

        let db_path = args.database.as_deref().unwrap_or(&config.database.path);
        let ledger_path = args.ledger.as_deref().unwrap_or(&config.ledger.path);
        log::debug!("Opening database '{db_path}', ledger '{ledger_path}'");

        ensure_parent_dir(db_path)?;
        ensure_parent_dir(ledger_path)?;

        let db: Arc<dyn Database> = Arc::new(
            DuckDbBackend::new(db_path).context("Failed to open application database")?,
        );
        let ledger: Arc<dyn Ledger> =
            Arc::new(DuckDbLedger::new(ledger_path).context("Failed to open migration ledger")?);

        Ok(Self {
            config,
            db,
            ledger,
            verbose: args.verbose,
        })
    }

    /// Build a runner over the registered migration set
    pub fn runner(&self) -> Runner {
        Runner::new(
            migrations::registry(),
            self.db.clone(),
            self.ledger.clone(),
            self.config.failed_policy,
        )
    }

    /// Print verbose output if enabled
    pub fn verbose(&self, msg: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", msg);
        }
    }
}

/// Create the parent directory of a database file path if needed
fn ensure_parent_dir(path: &str) -> Result<()> {
    if path == ":memory:" {
        return Ok(());
    }
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }
    Ok(())
}
