//! Document source: reads a flat JSON file into the snapshot.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use super::error::ConfigError;
use super::json::{tokenize, Token};
use super::keys::{lookup, KeySpec};
use super::slot::SlotValue;
use super::types::{Config, SlotMut};
use crate::constants::{MAX_CONFIG_JSON_FILE_SIZE, MAX_CONFIG_JSON_TOKENS};

/// Where the scanner is inside the root object.
#[derive(Debug, Clone, Copy)]
enum Scan {
    /// The next depth-1 token is a key.
    Key,
    /// The next depth-1 token is the value for this key, or `None` for an
    /// unrecognized key whose value is skipped.
    Value(Option<&'static KeySpec>),
}

impl Config {
    /// Reads `path` and assigns every recognized key it contains.
    ///
    /// Slots are written unconditionally: the document is always the first
    /// source of a run.
    ///
    /// # Errors
    ///
    /// [`ConfigError::FileUnreadable`] if the file cannot be read,
    /// [`ConfigError::ConfigTooLarge`] if it is at or above the byte ceiling,
    /// [`ConfigError::TooManyTokens`] if it exceeds the token ceiling.
    pub(super) fn load_document(&mut self, path: &Path) -> Result<(), ConfigError> {
        info!(path = %path.display(), "Reading configuration");

        let metadata = fs::metadata(path).map_err(|e| ConfigError::file_unreadable(path, e))?;
        if !metadata.is_file() {
            return Err(ConfigError::file_unreadable(
                path,
                io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
            ));
        }
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size >= MAX_CONFIG_JSON_FILE_SIZE {
            return Err(ConfigError::ConfigTooLarge {
                size,
                limit: MAX_CONFIG_JSON_FILE_SIZE,
            });
        }

        let raw = fs::read(path).map_err(|e| ConfigError::file_unreadable(path, e))?;
        // The file may have grown between the two reads.
        if raw.len() >= MAX_CONFIG_JSON_FILE_SIZE {
            return Err(ConfigError::ConfigTooLarge {
                size: raw.len(),
                limit: MAX_CONFIG_JSON_FILE_SIZE,
            });
        }

        self.apply_document(&String::from_utf8_lossy(&raw))
    }

    /// Tokenizes `document` and assigns recognized top-level keys.
    ///
    /// Keys only count directly inside the root object. A recognized key
    /// whose value is an object or array is dropped along with the nested
    /// tokens. A trailing key with no value is ignored.
    pub(super) fn apply_document(&mut self, document: &str) -> Result<(), ConfigError> {
        let tokens = tokenize(document, MAX_CONFIG_JSON_TOKENS)?;

        let mut depth = 0usize;
        let mut root_is_object = false;
        let mut state = Scan::Key;

        for token in tokens {
            match token {
                Token::ObjectStart | Token::ArrayStart => {
                    if depth == 0 {
                        root_is_object = token == Token::ObjectStart;
                        state = Scan::Key;
                    } else if let Scan::Value(Some(spec)) = state {
                        debug!(key = spec.key, "Ignoring nested value");
                    }
                    if depth == 1 {
                        // A nested value consumes the pending key.
                        state = Scan::Key;
                    }
                    depth += 1;
                }
                Token::ObjectEnd | Token::ArrayEnd => {
                    depth = depth.saturating_sub(1);
                }
                Token::String(text) | Token::Primitive(text) => {
                    if depth != 1 || !root_is_object {
                        continue;
                    }
                    state = match state {
                        // Only quoted keys are recognized.
                        Scan::Key if matches!(token, Token::String(_)) => Scan::Value(lookup(text)),
                        Scan::Key => Scan::Value(None),
                        Scan::Value(Some(spec)) => {
                            self.assign_from_document(spec, text);
                            Scan::Key
                        }
                        Scan::Value(None) => Scan::Key,
                    };
                }
            }
        }

        if let Scan::Value(Some(spec)) = state {
            debug!(key = spec.key, "Document ended before value");
        }
        Ok(())
    }

    fn assign_from_document(&mut self, spec: &KeySpec, raw: &str) {
        match self.slot_mut(spec.field) {
            SlotMut::Text(slot) => slot.assign(SlotValue::coerce(raw).unwrap_or_default()),
            SlotMut::Bool(slot) => slot.assign(SlotValue::coerce(raw).unwrap_or_default()),
            SlotMut::U64(slot) => slot.assign(SlotValue::coerce(raw).unwrap_or_default()),
            SlotMut::U32(slot) => slot.assign(SlotValue::coerce(raw).unwrap_or_default()),
        }
        if spec.field.is_duration() {
            self.seconds_to_ticks(spec.field);
        }
        debug!(key = spec.key, "Set from document");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HUNDREDS_OF_NANOS_IN_A_SECOND, MAX_TEXT_LEN};
    use serde_json::json;
    use std::io::Write;

    fn apply(doc: &str) -> Config {
        let mut config = Config::default();
        config.apply_document(doc).unwrap();
        config
    }

    #[test]
    fn test_all_types() {
        let doc = json!({
            "CANARY_CHANNEL_NAME": "demo",
            "CANARY_IS_MASTER": "false",
            "CANARY_USE_TURN": true,
            "CANARY_BITRATE": "2048",
            "CANARY_FRAMERATE": 24,
            "AWS_KVS_LOG_LEVEL": "2",
        });
        let config = apply(&doc.to_string());
        assert_eq!(config.channel_name(), "demo");
        assert!(config.is_master.is_assigned());
        assert!(!config.is_master());
        assert!(config.use_turn());
        assert_eq!(config.bit_rate(), 2048);
        assert_eq!(config.frame_rate(), 24);
        assert_eq!(config.log_level(), 2);
        assert!(!config.client_id.is_assigned());
    }

    #[test]
    fn test_durations_scaled_on_assign() {
        let config = apply(r#"{"CANARY_DURATION_IN_SECONDS": "60", "CANARY_ITERATION_IN_SECONDS": 20}"#);
        assert_eq!(config.duration(), 60 * HUNDREDS_OF_NANOS_IN_A_SECOND);
        assert_eq!(config.iteration_duration(), 20 * HUNDREDS_OF_NANOS_IN_A_SECOND);
    }

    #[test]
    fn test_huge_duration_saturates() {
        let config = apply(r#"{"CANARY_DURATION_IN_SECONDS": "18446744073709551615"}"#);
        assert_eq!(config.duration(), u64::MAX);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = apply(r#"{"SOMETHING_ELSE": "CANARY_CHANNEL_NAME", "CANARY_CLIENT_ID": "c1"}"#);
        assert!(!config.channel_name.is_assigned());
        assert_eq!(config.client_id(), "c1");
    }

    #[test]
    fn test_key_text_as_value_is_not_a_key() {
        let config = apply(r#"{"CANARY_CLIENT_ID": "CANARY_CHANNEL_NAME", "CANARY_REGION": "x"}"#);
        assert_eq!(config.client_id(), "CANARY_CHANNEL_NAME");
        assert!(!config.channel_name.is_assigned());
    }

    #[test]
    fn test_nested_value_dropped() {
        let config = apply(
            r#"{"CANARY_CHANNEL_NAME": {"CANARY_CLIENT_ID": "inner"}, "AWS_DEFAULT_REGION": "eu-west-1"}"#,
        );
        assert!(!config.channel_name.is_assigned());
        assert!(!config.client_id.is_assigned());
        assert_eq!(config.region(), "eu-west-1");
    }

    #[test]
    fn test_unquoted_key_not_recognized() {
        let config = apply(r#"{CANARY_CHANNEL_NAME: "bare", "CANARY_CLIENT_ID": "c1"}"#);
        assert!(!config.channel_name.is_assigned());
        assert_eq!(config.client_id(), "c1");
    }

    #[test]
    fn test_array_root_assigns_nothing() {
        let config = apply(r#"["CANARY_CHANNEL_NAME", "demo"]"#);
        assert!(!config.channel_name.is_assigned());
    }

    #[test]
    fn test_truncated_document_partially_applied() {
        let config = apply(r#"{"CANARY_CHANNEL_NAME": "demo", "CANARY_CLIENT_ID""#);
        assert_eq!(config.channel_name(), "demo");
        assert!(!config.client_id.is_assigned());

        let config = apply(r#"{"CANARY_CHANNEL_NAME": "demo", "CANARY_CLIENT_ID": "cut"#);
        assert_eq!(config.channel_name(), "demo");
        assert!(!config.client_id.is_assigned());
    }

    #[test]
    fn test_long_text_truncated() {
        let long = "n".repeat(600);
        let doc = format!(r#"{{"CANARY_LOG_GROUP_NAME": "{long}"}}"#);
        let config = apply(&doc);
        assert_eq!(config.log_group_name().len(), MAX_TEXT_LEN - 1);
    }

    #[test]
    fn test_unparseable_number_left_zero() {
        let config = apply(r#"{"CANARY_BITRATE": "lots"}"#);
        assert!(config.bit_rate.is_assigned());
        assert_eq!(config.bit_rate(), 0);
    }

    #[test]
    fn test_too_many_tokens() {
        let mut doc = String::from("{");
        for i in 0..70 {
            doc.push_str(&format!(r#""K{i}":{i},"#));
        }
        doc.push('}');
        let mut config = Config::default();
        let err = config.apply_document(&doc).unwrap_err();
        assert!(matches!(err, ConfigError::TooManyTokens { .. }));
    }

    #[test]
    fn test_load_document_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"CANARY_CHANNEL_NAME": "from-file"}}"#).unwrap();
        let mut config = Config::default();
        config.load_document(file.path()).unwrap();
        assert_eq!(config.channel_name(), "from-file");
    }

    #[test]
    fn test_load_document_size_ceiling() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&vec![b' '; MAX_CONFIG_JSON_FILE_SIZE]).unwrap();
        let mut config = Config::default();
        let err = config.load_document(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigTooLarge { size: 1024, limit: 1024 }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&vec![b' '; MAX_CONFIG_JSON_FILE_SIZE - 1]).unwrap();
        assert!(config.load_document(file.path()).is_ok());
    }

    #[test]
    fn test_load_document_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        let err = config.load_document(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::FileUnreadable { .. }));
    }

    #[test]
    fn test_load_document_directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        let err = config.load_document(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::FileUnreadable { .. }));
    }
}
