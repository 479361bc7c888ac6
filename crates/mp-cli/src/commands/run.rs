//! Run command implementation

use anyhow::Result;
use mp_core::RunReport;

use crate::cli::{GlobalArgs, OutputFormat, RunArgs};
use crate::commands::common::ExitCode;
use crate::context::RuntimeContext;

pub async fn execute(args: &RunArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global).await?;
    ctx.verbose(&format!(
        "project '{}', failed policy {:?}",
        ctx.config.name, ctx.config.failed_policy
    ));

    let report = ctx.runner().run().await?;

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print_report(&report),
    }

    // Non-zero exit when any migration in the batch failed; the outcome
    // list above has already been printed.
    if report.failed() > 0 {
        return Err(ExitCode(1).into());
    }
    Ok(())
}

fn print_report(report: &RunReport) {
    if report.total_pending == 0 {
        println!("Nothing to do: no pending migrations.");
        return;
    }

    println!("Running {} pending migration(s)", report.total_pending);
    for outcome in &report.results {
        match &outcome.error {
            None => println!(
                "  \u{2713} {} ({}) [{}ms]",
                outcome.version, outcome.name, outcome.execution_time_ms
            ),
            Some(err) => println!(
                "  \u{2717} {} - {} [{}ms]",
                outcome.version, err, outcome.execution_time_ms
            ),
        }
    }
    println!(
        "Applied {} of {} pending migration(s)",
        report.migrations_run, report.total_pending
    );
}
