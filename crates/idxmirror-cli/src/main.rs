use idxmirror_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Log file first; stderr if the state dir is unwritable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("log file unavailable, logging to stderr: {:#}", err);
    }

    if let Err(err) = CliCommand::run_from_args() {
        tracing::error!("run failed: {:#}", err);
        eprintln!("idxmirror error: {:#}", err);
        std::process::exit(1);
    }
}
