//! Layered configuration resolution for the canary.
//!
//! A run resolves its settings from an optional flat JSON document, then the
//! environment, then built-in defaults. The first source to assign a field
//! wins. A policy pass then clamps durations and derives the remaining
//! values, and the resulting [`Config`] is only read afterwards.

mod env;
mod error;
mod json;
mod keys;
mod loader;
mod policy;
mod resolve;
mod slot;
mod types;

pub use env::{EnvSource, ProcessEnv};
pub use error::ConfigError;
pub use types::Config;

use std::path::Path;

use tracing::debug;

/// Milliseconds since the Unix epoch, used for derived log stream names.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

impl Config {
    /// Resolve with precedence: document > environment > defaults.
    ///
    /// Each call starts from a fresh, unassigned snapshot.
    ///
    /// # Errors
    ///
    /// Stops at the first failure: an unreadable or oversized document, or a
    /// missing credential.
    pub fn resolve(
        document: Option<&Path>,
        env: &impl EnvSource,
        clock: &impl Clock,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = document {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::NullArgument {
                    name: "document path",
                });
            }
            config.load_document(path)?;
            debug!("Document phase complete");
        }

        config.apply_env(env)?;
        debug!("Environment phase complete");

        config.apply_policy(clock.now_millis());
        Ok(config)
    }

    /// Resolve against the process environment and the wall clock.
    pub fn load(document: Option<&Path>) -> Result<Self, ConfigError> {
        Self::resolve(document, &ProcessEnv, &SystemClock)
    }
}
