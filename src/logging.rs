//! Tracing subscriber setup.
//!
//! Logs go to stderr so rendered configuration on stdout stays clean.
//! `RUST_LOG` wins when set; otherwise the filter starts at `warn` and is
//! switched to the resolved `AWS_KVS_LOG_LEVEL` once configuration is known.

use anyhow::Result;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

use crate::constants::{
    LOG_LEVEL_DEBUG, LOG_LEVEL_ERROR, LOG_LEVEL_FATAL, LOG_LEVEL_INFO, LOG_LEVEL_SILENT,
    LOG_LEVEL_VERBOSE, LOG_LEVEL_WARN,
};

/// Lets the filter follow the resolved log level after startup.
pub struct LogHandle {
    handle: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

/// Installs the global subscriber. Call once, before resolution.
pub fn init() -> Result<LogHandle> {
    let (filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(level_filter(LOG_LEVEL_WARN).to_string()), false),
    };
    let (filter, handle) = reload::Layer::new(filter);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(LogHandle { handle, from_env })
}

impl LogHandle {
    /// Switches to the numeric canary log level unless `RUST_LOG` was set.
    pub fn apply_level(&self, level: u32) -> Result<()> {
        if self.from_env {
            return Ok(());
        }
        self.handle
            .reload(EnvFilter::new(level_filter(level).to_string()))?;
        Ok(())
    }
}

/// Maps the canary's numeric log levels onto tracing levels.
///
/// Fatal has no tracing equivalent and shares `error`. Unknown values fall
/// back to `warn`.
pub fn level_filter(level: u32) -> LevelFilter {
    match level {
        LOG_LEVEL_VERBOSE => LevelFilter::TRACE,
        LOG_LEVEL_DEBUG => LevelFilter::DEBUG,
        LOG_LEVEL_INFO => LevelFilter::INFO,
        LOG_LEVEL_WARN => LevelFilter::WARN,
        LOG_LEVEL_ERROR | LOG_LEVEL_FATAL => LevelFilter::ERROR,
        LOG_LEVEL_SILENT => LevelFilter::OFF,
        _ => LevelFilter::WARN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(level_filter(1), LevelFilter::TRACE);
        assert_eq!(level_filter(3), LevelFilter::INFO);
        assert_eq!(level_filter(4), LevelFilter::WARN);
        assert_eq!(level_filter(6), LevelFilter::ERROR);
        assert_eq!(level_filter(7), LevelFilter::OFF);
        assert_eq!(level_filter(0), LevelFilter::WARN);
        assert_eq!(level_filter(42), LevelFilter::WARN);
    }

    #[test]
    fn test_level_filter_parses_as_env_filter() {
        for level in 1..=7 {
            let directive = level_filter(level).to_string();
            assert!(EnvFilter::try_new(&directive).is_ok(), "{directive}");
        }
    }
}
