//! The recognized key table.
//!
//! Every setting has one name, used both as the JSON document key and as the
//! environment variable. [`KEYS`] is listed in environment-phase order.

use crate::constants::*;

/// Identifies one slot of the [`Config`](super::Config) snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    TrickleIce,
    UseTurn,
    ForceTurn,
    AccessKey,
    SecretKey,
    SessionToken,
    Region,
    LogLevel,
    ChannelName,
    ClientId,
    IsMaster,
    RunBothPeers,
    LogGroupName,
    LogStreamName,
    Duration,
    IterationDuration,
    BitRate,
    FrameRate,
}

impl Field {
    /// Fields given in seconds and stored in 100 ns units.
    pub fn is_duration(self) -> bool {
        matches!(self, Field::Duration | Field::IterationDuration)
    }
}

/// What the environment phase does when a variable is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// No default: absence aborts resolution.
    Required,
    Text(&'static str),
    Bool(bool),
    U64(u64),
    U32(u32),
    /// Left unassigned; the policy phase derives it.
    Derived,
}

/// One row of the recognized key table.
#[derive(Debug, Clone, Copy)]
pub struct KeySpec {
    pub key: &'static str,
    pub field: Field,
    pub fallback: Fallback,
}

/// All recognized settings, in environment-phase order.
///
/// Channel name and role come before the log stream name so a derived
/// stream name can use them.
pub const KEYS: &[KeySpec] = &[
    KeySpec {
        key: TRICKLE_ICE_ENV_VAR,
        field: Field::TrickleIce,
        fallback: Fallback::Bool(false),
    },
    KeySpec {
        key: USE_TURN_ENV_VAR,
        field: Field::UseTurn,
        fallback: Fallback::Bool(true),
    },
    KeySpec {
        key: FORCE_TURN_ENV_VAR,
        field: Field::ForceTurn,
        fallback: Fallback::Bool(false),
    },
    KeySpec {
        key: ACCESS_KEY_ENV_VAR,
        field: Field::AccessKey,
        fallback: Fallback::Required,
    },
    KeySpec {
        key: SECRET_KEY_ENV_VAR,
        field: Field::SecretKey,
        fallback: Fallback::Required,
    },
    KeySpec {
        key: SESSION_TOKEN_ENV_VAR,
        field: Field::SessionToken,
        fallback: Fallback::Text(""),
    },
    KeySpec {
        key: DEFAULT_REGION_ENV_VAR,
        field: Field::Region,
        fallback: Fallback::Text(DEFAULT_REGION),
    },
    KeySpec {
        key: LOG_LEVEL_ENV_VAR,
        field: Field::LogLevel,
        fallback: Fallback::U32(LOG_LEVEL_WARN),
    },
    KeySpec {
        key: CHANNEL_NAME_ENV_VAR,
        field: Field::ChannelName,
        fallback: Fallback::Text(DEFAULT_CHANNEL_NAME),
    },
    KeySpec {
        key: CLIENT_ID_ENV_VAR,
        field: Field::ClientId,
        fallback: Fallback::Text(DEFAULT_CLIENT_ID),
    },
    KeySpec {
        key: IS_MASTER_ENV_VAR,
        field: Field::IsMaster,
        fallback: Fallback::Bool(true),
    },
    KeySpec {
        key: RUN_BOTH_PEERS_ENV_VAR,
        field: Field::RunBothPeers,
        fallback: Fallback::Bool(false),
    },
    KeySpec {
        key: LOG_GROUP_NAME_ENV_VAR,
        field: Field::LogGroupName,
        fallback: Fallback::Text(DEFAULT_LOG_GROUP_NAME),
    },
    KeySpec {
        key: LOG_STREAM_NAME_ENV_VAR,
        field: Field::LogStreamName,
        fallback: Fallback::Derived,
    },
    KeySpec {
        key: DURATION_IN_SECONDS_ENV_VAR,
        field: Field::Duration,
        fallback: Fallback::U64(DEFAULT_DURATION_IN_SECONDS),
    },
    KeySpec {
        key: ITERATION_IN_SECONDS_ENV_VAR,
        field: Field::IterationDuration,
        fallback: Fallback::U64(DEFAULT_ITERATION_DURATION_IN_SECONDS),
    },
    KeySpec {
        key: BIT_RATE_ENV_VAR,
        field: Field::BitRate,
        fallback: Fallback::U64(DEFAULT_BITRATE),
    },
    KeySpec {
        key: FRAME_RATE_ENV_VAR,
        field: Field::FrameRate,
        fallback: Fallback::U64(DEFAULT_FRAMERATE),
    },
];

/// Finds the table row for a document key or variable name. Case-sensitive.
pub fn lookup(key: &str) -> Option<&'static KeySpec> {
    KEYS.iter().find(|spec| spec.key == key)
}
