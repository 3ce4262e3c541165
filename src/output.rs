//! Rendering of the resolved configuration.
//!
//! Defines the [`Renderer`] trait that decouples the snapshot from how it is
//! shown. [`TextRenderer`] prints the human summary; [`JsonRenderer`] emits
//! the same fields for scripts. Credentials are never rendered.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

use crate::config::Config;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Turns a resolved configuration into printable output.
pub trait Renderer {
    fn render(&self, config: &Config) -> Result<String>;
}

/// Returns the renderer for `format`.
pub fn renderer(format: Format) -> Box<dyn Renderer> {
    match format {
        Format::Text => Box::new(TextRenderer { color: true }),
        Format::Json => Box::new(JsonRenderer),
    }
}

/// Aligned `label : value` summary.
pub struct TextRenderer {
    /// Dim the labels. Disabled in tests for stable output.
    pub color: bool,
}

impl TextRenderer {
    fn row(&self, out: &mut String, label: &str, value: impl std::fmt::Display) {
        let label = format!("{label:<14}:");
        if self.color {
            out.push_str(&format!("\t{} {}\n", label.dimmed(), value));
        } else {
            out.push_str(&format!("\t{} {}\n", label, value));
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "True"
    } else {
        "False"
    }
}

impl Renderer for TextRenderer {
    fn render(&self, config: &Config) -> Result<String> {
        let mut out = String::from("\n");
        let role = if config.is_master() { "Master" } else { "Viewer" };
        self.row(&mut out, "Channel Name", config.channel_name());
        self.row(&mut out, "Region", config.region());
        self.row(&mut out, "Client ID", config.client_id());
        self.row(&mut out, "Role", role);
        self.row(&mut out, "Trickle ICE", yes_no(config.trickle_ice()));
        self.row(&mut out, "Use TURN", yes_no(config.use_turn()));
        self.row(&mut out, "Force TURN", yes_no(config.force_turn()));
        self.row(&mut out, "Log Level", config.log_level());
        self.row(&mut out, "Log Group", config.log_group_name());
        self.row(&mut out, "Log Stream", config.log_stream_name());
        self.row(
            &mut out,
            "Duration",
            format!("{} seconds", config.duration_secs()),
        );
        self.row(
            &mut out,
            "Iteration",
            format!("{} seconds", config.iteration_duration_secs()),
        );
        self.row(&mut out, "Bitrate", config.bit_rate());
        self.row(&mut out, "Framerate", config.frame_rate());
        self.row(&mut out, "Run both peers", yes_no(config.run_both_peers()));
        Ok(out)
    }
}

/// Pretty-printed JSON object.
pub struct JsonRenderer;

#[derive(Serialize)]
struct ConfigView<'a> {
    channel_name: &'a str,
    region: &'a str,
    client_id: &'a str,
    role: &'static str,
    trickle_ice: bool,
    use_turn: bool,
    force_turn: bool,
    run_both_peers: bool,
    session_token_set: bool,
    log_level: u32,
    log_group_name: &'a str,
    log_stream_name: &'a str,
    duration_secs: u64,
    iteration_duration_secs: u64,
    bit_rate: u64,
    frame_rate: u64,
}

impl<'a> From<&'a Config> for ConfigView<'a> {
    fn from(config: &'a Config) -> Self {
        Self {
            channel_name: config.channel_name(),
            region: config.region(),
            client_id: config.client_id(),
            role: config.role(),
            trickle_ice: config.trickle_ice(),
            use_turn: config.use_turn(),
            force_turn: config.force_turn(),
            run_both_peers: config.run_both_peers(),
            session_token_set: !config.session_token().is_empty(),
            log_level: config.log_level(),
            log_group_name: config.log_group_name(),
            log_stream_name: config.log_stream_name(),
            duration_secs: config.duration_secs(),
            iteration_duration_secs: config.iteration_duration_secs(),
            bit_rate: config.bit_rate(),
            frame_rate: config.frame_rate(),
        }
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, config: &Config) -> Result<String> {
        Ok(serde_json::to_string_pretty(&ConfigView::from(config))?)
    }
}

/// Prints an error chain to stderr in the CLI's error style.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "error:".red().bold(), err);
    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "caused by:".dimmed(), cause);
    }
}
