//! Entry point for canary-config.
//!
//! Loads `.env`, parses CLI arguments via [`cli`], installs logging, then
//! resolves and prints the canary configuration.

mod cli;
mod config;
mod constants;
mod logging;
mod output;

use std::process::ExitCode;

/// Runs the canary-config CLI.
///
/// `.env` files are silently ignored if absent. Resolution errors are printed
/// with their cause chain and turn into a failing exit status.
fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = cli::parse();

    let result = logging::init().and_then(|logging| cli::run(cli, &logging));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
