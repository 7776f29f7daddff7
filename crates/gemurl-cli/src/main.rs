use gemurl_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    logging::init();

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        tracing::info!("command failed: {:#}", err);
        eprintln!("gemurl error: {:#}", err);
        std::process::exit(1);
    }
}
