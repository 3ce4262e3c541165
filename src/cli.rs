//! Command-line interface definition and dispatch for canary-config.
//!
//! Uses [`clap`] for argument parsing with derive macros. The only input is
//! an optional path to a flat JSON configuration file; everything else
//! comes from the environment.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::logging::LogHandle;
use crate::output::{self, Format};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = APP_NAME,
    about = "Resolve canary configuration from a JSON file and the environment"
)]
pub struct Cli {
    /// Flat JSON configuration file; values here win over the environment
    pub config: Option<PathBuf>,
    /// Output format for the resolved configuration
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid input.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Resolves the configuration and prints it.
///
/// Any resolution failure is returned, so the process exits non-zero
/// before doing further work.
pub fn run(cli: Cli, logging: &LogHandle) -> Result<()> {
    let config = match cli.config.as_deref() {
        Some(path) => Config::load(Some(path))
            .with_context(|| format!("Failed to resolve configuration from {:?}", path))?,
        None => Config::load(None).context("Failed to resolve configuration")?,
    };

    logging.apply_level(config.log_level())?;
    tracing::debug!(channel = config.channel_name(), "Configuration resolved");

    let rendered = output::renderer(cli.format).render(&config)?;
    println!("{}", rendered);
    Ok(())
}
