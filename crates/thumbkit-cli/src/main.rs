use clap::Parser;
use thumbkit_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging before any command runs; stderr if the state dir is unusable.
    let filter = logging::filter_for(cli.verbose);
    if let Err(err) = logging::init_logging(filter) {
        logging::init_logging_stderr(filter);
        tracing::warn!("log file unavailable, logging to stderr: {err:#}");
    }

    if let Err(err) = cli.run() {
        eprintln!("thumbkit error: {:#}", err);
        std::process::exit(1);
    }
}
