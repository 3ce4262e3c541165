//! Centralized constants for the canary configuration.
//!
//! Variable names, built-in defaults, and resolution limits live here so
//! they can be changed in one place.

/// Application name used in CLI output.
pub const APP_NAME: &str = "canary-config";

// --- Variable names (identical in the JSON document and the environment) ---

pub const CHANNEL_NAME_ENV_VAR: &str = "CANARY_CHANNEL_NAME";
pub const CLIENT_ID_ENV_VAR: &str = "CANARY_CLIENT_ID";
pub const IS_MASTER_ENV_VAR: &str = "CANARY_IS_MASTER";
pub const TRICKLE_ICE_ENV_VAR: &str = "CANARY_TRICKLE_ICE";
pub const USE_TURN_ENV_VAR: &str = "CANARY_USE_TURN";
pub const FORCE_TURN_ENV_VAR: &str = "CANARY_FORCE_TURN";
pub const LOG_GROUP_NAME_ENV_VAR: &str = "CANARY_LOG_GROUP_NAME";
pub const LOG_STREAM_NAME_ENV_VAR: &str = "CANARY_LOG_STREAM_NAME";
pub const DURATION_IN_SECONDS_ENV_VAR: &str = "CANARY_DURATION_IN_SECONDS";
pub const ITERATION_IN_SECONDS_ENV_VAR: &str = "CANARY_ITERATION_IN_SECONDS";
pub const BIT_RATE_ENV_VAR: &str = "CANARY_BITRATE";
pub const FRAME_RATE_ENV_VAR: &str = "CANARY_FRAMERATE";
pub const RUN_BOTH_PEERS_ENV_VAR: &str = "CANARY_RUN_BOTH_PEERS";
pub const ACCESS_KEY_ENV_VAR: &str = "AWS_ACCESS_KEY_ID";
pub const SECRET_KEY_ENV_VAR: &str = "AWS_SECRET_ACCESS_KEY";
pub const SESSION_TOKEN_ENV_VAR: &str = "AWS_SESSION_TOKEN";
pub const DEFAULT_REGION_ENV_VAR: &str = "AWS_DEFAULT_REGION";
pub const LOG_LEVEL_ENV_VAR: &str = "AWS_KVS_LOG_LEVEL";

// --- Built-in defaults ---

/// Default AWS region.
pub const DEFAULT_REGION: &str = "us-west-2";

/// Default signaling channel name.
pub const DEFAULT_CHANNEL_NAME: &str = "ScaryTestChannel";

/// Default signaling client identifier.
pub const DEFAULT_CLIENT_ID: &str = "DefaultClientId";

/// Default CloudWatch log group.
pub const DEFAULT_LOG_GROUP_NAME: &str = "canary";

/// Default run duration in seconds. Zero means run until stopped.
pub const DEFAULT_DURATION_IN_SECONDS: u64 = 0;

/// Default iteration duration in seconds.
pub const DEFAULT_ITERATION_DURATION_IN_SECONDS: u64 = 30;

/// Default encoder bitrate (bits per second).
pub const DEFAULT_BITRATE: u64 = 1024 * 1024;

/// Default encoder framerate.
pub const DEFAULT_FRAMERATE: u64 = 30;

// --- Log levels ---

pub const LOG_LEVEL_VERBOSE: u32 = 1;
pub const LOG_LEVEL_DEBUG: u32 = 2;
pub const LOG_LEVEL_INFO: u32 = 3;
pub const LOG_LEVEL_WARN: u32 = 4;
pub const LOG_LEVEL_ERROR: u32 = 5;
pub const LOG_LEVEL_FATAL: u32 = 6;
pub const LOG_LEVEL_SILENT: u32 = 7;

// --- Time ---

/// Internal time unit is 100 ns.
pub const HUNDREDS_OF_NANOS_IN_A_SECOND: u64 = 10_000_000;

/// Shortest allowed bounded run (30 seconds, in 100 ns units).
pub const MIN_DURATION: u64 = 30 * HUNDREDS_OF_NANOS_IN_A_SECOND;

/// Shortest allowed iteration (15 seconds, in 100 ns units).
pub const MIN_ITERATION_DURATION: u64 = 15 * HUNDREDS_OF_NANOS_IN_A_SECOND;

// --- Limits ---

/// Text slot capacity in bytes, including one reserved terminator byte.
/// Usable content is one byte less.
pub const MAX_TEXT_LEN: usize = 256;

/// A configuration document must be strictly smaller than this many bytes.
pub const MAX_CONFIG_JSON_FILE_SIZE: usize = 1024;

/// Maximum number of tokens a configuration document may produce.
pub const MAX_CONFIG_JSON_TOKENS: usize = 128;
