mod commands;
mod logging;
mod reporter;

use std::process::ExitCode;
use std::sync::atomic::Ordering;

use anyhow::Context;
use clap::Parser;
use colored::*;
use commands::Cli;
use dotenv::dotenv;
use nfc_rename_core::{NormalizeEngine, RunSummary};
use reporter::CliReporter;
use tracing::{debug, error, warn};

fn main() -> ExitCode {
    dotenv().ok();

    let args = Cli::parse();
    let _guard = logging::init_logger(args.verbose);

    match run(&args) {
        Ok(summary) => {
            debug!("Run finished: {:?}", summary);
            ExitCode::SUCCESS
        }
        Err(err) => {
            if matches!(
                err.downcast_ref::<nfc_rename_core::Error>(),
                Some(nfc_rename_core::Error::Interrupted)
            ) {
                error!("Interrupted by user");
                eprintln!("\n{}", "Operation interrupted by user.".yellow());
            } else {
                error!("Error: {:#}", err);
                eprintln!("{} {:#}", "Error:".red(), err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Cli) -> anyhow::Result<RunSummary> {
    let config =
        nfc_rename_core::config::load_configuration().context("Error loading configuration")?;
    debug!("Configuration: {:?}", config);

    let mut engine = NormalizeEngine::new(config);
    if let Some(order) = args.dir_order {
        engine = engine.with_dir_order(order.into());
    }
    debug!("Directory rename order: {:?}", engine.dir_order());

    let cancel_token = engine.cancel_token();
    if let Err(err) = ctrlc::set_handler(move || cancel_token.store(true, Ordering::Relaxed)) {
        warn!("Could not install Ctrl-C handler: {}", err);
    }

    let reporter = CliReporter::new(args.verbose);
    let summary = engine.run(&args.path, &reporter)?;
    Ok(summary)
}
