//! Status command implementation

use anyhow::Result;
use mp_core::StatusReport;

use crate::cli::{GlobalArgs, OutputFormat, StatusArgs};
use crate::context::RuntimeContext;

pub async fn execute(args: &StatusArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global).await?;

    let report = ctx.runner().status().await?;

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print_status(&ctx.config.name, &report),
    }
    Ok(())
}

fn print_status(project: &str, report: &StatusReport) {
    println!(
        "{}: {} total, {} executed, {} pending, {} failed, {} rolled back",
        project, report.total, report.executed, report.pending, report.failed, report.rolled_back
    );
    if report.available_migrations.is_empty() {
        return;
    }

    println!();
    for info in &report.available_migrations {
        let entry = report
            .executed_migrations
            .iter()
            .find(|e| e.version == info.version);
        let (state, timing) = match entry {
            Some(e) => (
                e.status.as_str(),
                format!(
                    " at {} [{}ms]",
                    e.executed_at.format("%Y-%m-%d %H:%M:%S"),
                    e.execution_time_ms
                ),
            ),
            None => ("unattempted", String::new()),
        };
        println!("  {:<28} {:<12}{}", info.version.as_str(), state, timing);
    }

    // Ledger history for versions whose descriptor is gone.
    for entry in &report.executed_migrations {
        let known = report
            .available_migrations
            .iter()
            .any(|m| m.version == entry.version);
        if !known {
            println!(
                "  {:<28} {:<12} (no matching migration)",
                entry.version.as_str(),
                entry.status.as_str()
            );
        }
    }
}
