use cmsutil_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible.
    if let Err(err) = logging::init() {
        eprintln!("cmsutil: logging disabled: {:#}", err);
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("cmsutil error: {:#}", err);
        std::process::exit(1);
    }
}
