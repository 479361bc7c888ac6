//! Rollback command implementation

use anyhow::{Context, Result};

use crate::cli::{GlobalArgs, RollbackArgs};
use crate::context::RuntimeContext;

pub async fn execute(args: &RollbackArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global).await?;

    let report = ctx
        .runner()
        .rollback(&args.version)
        .await
        .with_context(|| format!("Rollback of '{}' did not complete", args.version))?;

    println!(
        "  \u{2713} Rolled back {} [{}ms]",
        report.version, report.execution_time_ms
    );
    Ok(())
}
