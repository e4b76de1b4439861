use pitchdeck_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible; fall back to stderr if the
    // state dir is not writable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args().await {
        tracing::error!("command failed: {:#}", err);
        eprintln!("pitchdeck error: {:#}", err);
        std::process::exit(1);
    }
}
