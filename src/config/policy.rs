//! Policy phase: clamping and derived values applied after both sources.

use tracing::warn;

use super::slot::Text;
use super::types::Config;
use crate::constants::{
    HUNDREDS_OF_NANOS_IN_A_SECOND, LOG_LEVEL_WARN, MIN_DURATION, MIN_ITERATION_DURATION,
};

impl Config {
    /// Applies, in order: run-duration floor (zero exempt), iteration floor,
    /// derived log stream name, default log level. Never fails.
    pub(super) fn apply_policy(&mut self, now_millis: u64) {
        let duration = self.duration.copied();
        if duration != 0 && duration < MIN_DURATION {
            warn!(
                "Canary duration should be at least {} seconds. Overriding with minimal duration.",
                MIN_DURATION / HUNDREDS_OF_NANOS_IN_A_SECOND
            );
            self.duration.assign(MIN_DURATION);
        }

        if self.iteration_duration.copied() < MIN_ITERATION_DURATION {
            warn!(
                "Canary iteration duration should be at least {} seconds. Overriding with minimal iteration duration.",
                MIN_ITERATION_DURATION / HUNDREDS_OF_NANOS_IN_A_SECOND
            );
            self.iteration_duration.assign(MIN_ITERATION_DURATION);
        }

        if !self.log_stream_name.is_assigned() {
            let name = format!("{}-{}-{}", self.channel_name(), self.role(), now_millis);
            self.log_stream_name.assign(Text::new(&name));
        }

        if !self.log_level.is_assigned() {
            self.log_level.assign(LOG_LEVEL_WARN);
        }
    }
}
