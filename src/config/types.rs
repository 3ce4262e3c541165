//! The configuration snapshot.

use super::keys::Field;
use super::slot::{Text, Value};
use crate::constants::HUNDREDS_OF_NANOS_IN_A_SECOND;

/// Resolved canary configuration.
///
/// Built once per run by [`Config::resolve`], then only read. Durations are
/// stored in 100 ns units.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub(super) channel_name: Value<Text>,
    pub(super) client_id: Value<Text>,
    pub(super) is_master: Value<bool>,
    pub(super) trickle_ice: Value<bool>,
    pub(super) use_turn: Value<bool>,
    pub(super) force_turn: Value<bool>,
    pub(super) run_both_peers: Value<bool>,
    pub(super) access_key: Value<Text>,
    pub(super) secret_key: Value<Text>,
    pub(super) session_token: Value<Text>,
    pub(super) region: Value<Text>,
    pub(super) log_level: Value<u32>,
    pub(super) log_group_name: Value<Text>,
    pub(super) log_stream_name: Value<Text>,
    pub(super) duration: Value<u64>,
    pub(super) iteration_duration: Value<u64>,
    pub(super) bit_rate: Value<u64>,
    pub(super) frame_rate: Value<u64>,
}

/// Mutable, typed access to one slot, chosen by [`Field`].
#[derive(Debug)]
pub(super) enum SlotMut<'a> {
    Text(&'a mut Value<Text>),
    Bool(&'a mut Value<bool>),
    U64(&'a mut Value<u64>),
    U32(&'a mut Value<u32>),
}

impl Config {
    pub(super) fn slot_mut(&mut self, field: Field) -> SlotMut<'_> {
        match field {
            Field::TrickleIce => SlotMut::Bool(&mut self.trickle_ice),
            Field::UseTurn => SlotMut::Bool(&mut self.use_turn),
            Field::ForceTurn => SlotMut::Bool(&mut self.force_turn),
            Field::AccessKey => SlotMut::Text(&mut self.access_key),
            Field::SecretKey => SlotMut::Text(&mut self.secret_key),
            Field::SessionToken => SlotMut::Text(&mut self.session_token),
            Field::Region => SlotMut::Text(&mut self.region),
            Field::LogLevel => SlotMut::U32(&mut self.log_level),
            Field::ChannelName => SlotMut::Text(&mut self.channel_name),
            Field::ClientId => SlotMut::Text(&mut self.client_id),
            Field::IsMaster => SlotMut::Bool(&mut self.is_master),
            Field::RunBothPeers => SlotMut::Bool(&mut self.run_both_peers),
            Field::LogGroupName => SlotMut::Text(&mut self.log_group_name),
            Field::LogStreamName => SlotMut::Text(&mut self.log_stream_name),
            Field::Duration => SlotMut::U64(&mut self.duration),
            Field::IterationDuration => SlotMut::U64(&mut self.iteration_duration),
            Field::BitRate => SlotMut::U64(&mut self.bit_rate),
            Field::FrameRate => SlotMut::U64(&mut self.frame_rate),
        }
    }

    pub(super) fn is_assigned(&self, field: Field) -> bool {
        match field {
            Field::TrickleIce => self.trickle_ice.is_assigned(),
            Field::UseTurn => self.use_turn.is_assigned(),
            Field::ForceTurn => self.force_turn.is_assigned(),
            Field::AccessKey => self.access_key.is_assigned(),
            Field::SecretKey => self.secret_key.is_assigned(),
            Field::SessionToken => self.session_token.is_assigned(),
            Field::Region => self.region.is_assigned(),
            Field::LogLevel => self.log_level.is_assigned(),
            Field::ChannelName => self.channel_name.is_assigned(),
            Field::ClientId => self.client_id.is_assigned(),
            Field::IsMaster => self.is_master.is_assigned(),
            Field::RunBothPeers => self.run_both_peers.is_assigned(),
            Field::LogGroupName => self.log_group_name.is_assigned(),
            Field::LogStreamName => self.log_stream_name.is_assigned(),
            Field::Duration => self.duration.is_assigned(),
            Field::IterationDuration => self.iteration_duration.is_assigned(),
            Field::BitRate => self.bit_rate.is_assigned(),
            Field::FrameRate => self.frame_rate.is_assigned(),
        }
    }

    /// Rescales a just-assigned duration from seconds to 100 ns units.
    pub(super) fn seconds_to_ticks(&mut self, field: Field) {
        if let SlotMut::U64(slot) = self.slot_mut(field) {
            let ticks = slot.copied().saturating_mul(HUNDREDS_OF_NANOS_IN_A_SECOND);
            slot.assign(ticks);
        }
    }

    pub fn channel_name(&self) -> &str {
        self.channel_name.get().as_str()
    }

    pub fn client_id(&self) -> &str {
        self.client_id.get().as_str()
    }

    /// `true` for the master role, `false` for viewer.
    pub fn is_master(&self) -> bool {
        self.is_master.copied()
    }

    /// Role label used in log stream names.
    pub fn role(&self) -> &'static str {
        if self.is_master() {
            "master"
        } else {
            "viewer"
        }
    }

    pub fn trickle_ice(&self) -> bool {
        self.trickle_ice.copied()
    }

    pub fn use_turn(&self) -> bool {
        self.use_turn.copied()
    }

    pub fn force_turn(&self) -> bool {
        self.force_turn.copied()
    }

    pub fn run_both_peers(&self) -> bool {
        self.run_both_peers.copied()
    }

    #[allow(dead_code)]
    pub fn access_key(&self) -> &str {
        self.access_key.get().as_str()
    }

    #[allow(dead_code)]
    pub fn secret_key(&self) -> &str {
        self.secret_key.get().as_str()
    }

    /// Empty when no session token was supplied.
    pub fn session_token(&self) -> &str {
        self.session_token.get().as_str()
    }

    pub fn region(&self) -> &str {
        self.region.get().as_str()
    }

    /// Numeric verbosity: 1 (verbose) through 7 (silent).
    pub fn log_level(&self) -> u32 {
        self.log_level.copied()
    }

    pub fn log_group_name(&self) -> &str {
        self.log_group_name.get().as_str()
    }

    pub fn log_stream_name(&self) -> &str {
        self.log_stream_name.get().as_str()
    }

    /// Total run time in 100 ns units. Zero means unbounded.
    pub fn duration(&self) -> u64 {
        self.duration.copied()
    }

    /// Iteration length in 100 ns units.
    pub fn iteration_duration(&self) -> u64 {
        self.iteration_duration.copied()
    }

    pub fn duration_secs(&self) -> u64 {
        self.duration() / HUNDREDS_OF_NANOS_IN_A_SECOND
    }

    pub fn iteration_duration_secs(&self) -> u64 {
        self.iteration_duration() / HUNDREDS_OF_NANOS_IN_A_SECOND
    }

    pub fn bit_rate(&self) -> u64 {
        self.bit_rate.copied()
    }

    pub fn frame_rate(&self) -> u64 {
        self.frame_rate.copied()
    }
}
