//! Milepost CLI - versioned migration runner for the content store

use clap::Parser;

mod cli;
mod commands;
mod context;
mod migrations;

use cli::Cli;
use commands::common::ExitCode;
use commands::{rollback, run, status};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        cli::Commands::Run(args) => run::execute(args, &cli.global).await,
        cli::Commands::Rollback(args) => rollback::execute(args, &cli.global).await,
        cli::Commands::Status(args) => status::execute(args, &cli.global).await,
    };

    if let Err(e) = result {
        match e.downcast_ref::<ExitCode>() {
            // The command already printed its report; just carry the code.
            Some(ExitCode(code)) => std::process::exit(*code),
            None => {
                eprintln!("Error: {e:#}");
                std::process::exit(1);
            }
        }
    }
}
