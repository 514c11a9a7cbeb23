// menkyo-rs/menkyo/src/monitor/config.rs

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::{
    DEFAULT_LIVENESS_TIMEOUT_MS, DEFAULT_MAX_ATTEMPTS, DEFAULT_POLL_ERROR_DELAY_MS,
    DEFAULT_POLL_TIMEOUT_MS, DEFAULT_RETRY_DELAY_MS, ms,
};

/// Monitor timings and retry budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MonitorConfig {
    /// Timeout of the main presence poll.
    pub poll_timeout: Duration,
    /// Timeout of the short poll that checks the card before a retry.
    pub liveness_timeout: Duration,
    /// Pause between read attempts.
    pub retry_delay: Duration,
    /// Read attempts per card occupancy, the first included.
    pub max_attempts: u32,
    /// Pause after a failed presence poll.
    pub poll_error_delay: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_timeout: ms(DEFAULT_POLL_TIMEOUT_MS),
            liveness_timeout: ms(DEFAULT_LIVENESS_TIMEOUT_MS),
            retry_delay: ms(DEFAULT_RETRY_DELAY_MS),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            poll_error_delay: ms(DEFAULT_POLL_ERROR_DELAY_MS),
        }
    }
}

impl MonitorConfig {
    pub fn with_poll_timeout(mut self, timeout: Duration) -> Self {
        self.poll_timeout = timeout;
        self
    }

    pub fn with_liveness_timeout(mut self, timeout: Duration) -> Self {
        self.liveness_timeout = timeout;
        self
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Values below 1 are raised to 1; a card always gets one attempt.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub fn with_poll_error_delay(mut self, delay: Duration) -> Self {
        self.poll_error_delay = delay;
        self
    }
}
