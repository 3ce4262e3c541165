//! Environment source reader.
//!
//! Pulls named variables from an [`EnvSource`] into unassigned slots, in
//! required or optional mode.

use std::collections::HashMap;

use super::error::ConfigError;
use super::slot::{SlotValue, Value};

/// A name → string lookup. The process environment in production, a map in tests.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads from the real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Reads a mandatory variable.
///
/// Already-assigned slots are left alone without consulting the source.
/// Otherwise an absent variable is a [`ConfigError::MissingRequiredConfig`].
pub fn must_env<T: SlotValue>(
    source: &impl EnvSource,
    key: &str,
    slot: &mut Value<T>,
) -> Result<(), ConfigError> {
    if slot.is_assigned() {
        return Ok(());
    }
    let raw = source
        .var(key)
        .ok_or_else(|| ConfigError::missing_required(key))?;
    slot.assign(T::coerce(&raw).unwrap_or_default());
    Ok(())
}

/// Reads an optional variable, falling back to `default` when absent.
///
/// For boolean and numeric slots an empty value also counts as absent.
/// Text slots copy an empty value verbatim.
pub fn opt_env<T: SlotValue>(source: &impl EnvSource, key: &str, slot: &mut Value<T>, default: T) {
    if slot.is_assigned() {
        return;
    }
    match source.var(key) {
        Some(raw) if !(raw.is_empty() && T::EMPTY_IS_ABSENT) => {
            slot.assign(T::coerce(&raw).unwrap_or_default());
        }
        _ => slot.assign(default),
    }
}
