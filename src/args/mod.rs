// Public modules
pub mod types;
mod validators;

pub use types::*;
pub use validators::check_no_glob;

use clap::Parser;
use std::process;

/// Parse command line arguments (and their `PLUGIN_*` environment mirrors)
/// and validate them
///
/// Exits the process with status 1 if validation fails, before any file is
/// inspected or any command is run.
#[must_use]
pub fn args_checks() -> Args {
    let args = Args::parse();

    if let Err(e) = args.validate() {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    args
}
