//! Environment phase: fills every slot the document left unassigned.

use tracing::debug;

use super::env::{must_env, opt_env, EnvSource};
use super::error::ConfigError;
use super::keys::{Fallback, KeySpec, KEYS};
use super::slot::Text;
use super::types::{Config, SlotMut};

impl Config {
    /// Visits every key in table order. Credentials are required; every
    /// other field falls back to its built-in default. The log stream name
    /// is only taken when set, and is otherwise derived by the policy phase.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingRequiredConfig`] for the first required key
    /// that neither source supplied.
    pub(super) fn apply_env(&mut self, source: &impl EnvSource) -> Result<(), ConfigError> {
        for spec in KEYS {
            if self.read_env(source, spec)? {
                if spec.field.is_duration() {
                    self.seconds_to_ticks(spec.field);
                }
                debug!(key = spec.key, "Set from environment or default");
            }
        }
        Ok(())
    }

    /// Returns whether this call assigned the slot. Slots the document set
    /// are skipped, as is an unset derived field.
    fn read_env(&mut self, source: &impl EnvSource, spec: &KeySpec) -> Result<bool, ConfigError> {
        if self.is_assigned(spec.field) {
            return Ok(false);
        }
        let key = spec.key;
        match (self.slot_mut(spec.field), spec.fallback) {
            (SlotMut::Text(slot), Fallback::Required) => must_env(source, key, slot)?,
            (SlotMut::Bool(slot), Fallback::Required) => must_env(source, key, slot)?,
            (SlotMut::U64(slot), Fallback::Required) => must_env(source, key, slot)?,
            (SlotMut::U32(slot), Fallback::Required) => must_env(source, key, slot)?,
            (SlotMut::Text(slot), Fallback::Text(default)) => {
                opt_env(source, key, slot, Text::new(default))
            }
            (SlotMut::Bool(slot), Fallback::Bool(default)) => opt_env(source, key, slot, default),
            (SlotMut::U64(slot), Fallback::U64(default)) => opt_env(source, key, slot, default),
            (SlotMut::U32(slot), Fallback::U32(default)) => opt_env(source, key, slot, default),
            (SlotMut::Text(slot), Fallback::Derived) => {
                if let Some(raw) = source.var(key) {
                    slot.assign(Text::new(&raw));
                }
            }
            (slot, fallback) => {
                unreachable!("{key}: fallback {fallback:?} does not fit slot {slot:?}")
            }
        }
        Ok(self.is_assigned(spec.field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::keys::Field;
    use std::collections::HashMap;

    /// Every table fallback must match its slot type, or `read_env` panics.
    #[test]
    fn test_fallbacks_match_slot_types() {
        let mut config = Config::default();
        for spec in KEYS {
            let fits = matches!(
                (config.slot_mut(spec.field), spec.fallback),
                (_, Fallback::Required)
                    | (SlotMut::Text(_), Fallback::Text(_) | Fallback::Derived)
                    | (SlotMut::Bool(_), Fallback::Bool(_))
                    | (SlotMut::U64(_), Fallback::U64(_))
                    | (SlotMut::U32(_), Fallback::U32(_))
            );
            assert!(fits, "{} has a mismatched fallback", spec.key);
        }
    }

    #[test]
    fn test_env_skips_fields_from_document() {
        let mut config = Config::default();
        config
            .apply_document(r#"{"CANARY_ITERATION_IN_SECONDS": "20"}"#)
            .unwrap();
        let env: HashMap<String, String> = [
            ("AWS_ACCESS_KEY_ID", "ak"),
            ("AWS_SECRET_ACCESS_KEY", "sk"),
            ("CANARY_ITERATION_IN_SECONDS", "99"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        config.apply_env(&env).unwrap();
        // Scaled once, by the document phase only.
        assert_eq!(config.iteration_duration_secs(), 20);
        assert!(!config.log_stream_name.is_assigned());
        assert!(config.is_assigned(Field::FrameRate));
    }

    #[test]
    fn test_read_env_reports_only_fresh_writes() {
        let mut config = Config::default();
        config
            .apply_document(r#"{"CANARY_CHANNEL_NAME": "doc"}"#)
            .unwrap();
        let env: HashMap<String, String> = [("CANARY_CHANNEL_NAME", "env"), ("CANARY_CLIENT_ID", "env")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let spec = |field: Field| KEYS.iter().find(|s| s.field == field).unwrap();

        assert!(!config.read_env(&env, spec(Field::ChannelName)).unwrap());
        assert_eq!(config.channel_name(), "doc");
        assert!(config.read_env(&env, spec(Field::ClientId)).unwrap());
        assert!(config.read_env(&env, spec(Field::Region)).unwrap());
        // Unset derived field stays open for the policy phase.
        assert!(!config.read_env(&env, spec(Field::LogStreamName)).unwrap());
        assert!(!config.log_stream_name.is_assigned());
    }
}
