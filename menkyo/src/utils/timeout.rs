//! Timing defaults for presence polling and the retry loop.
//!
//! Centralized here so the monitor config, the PC/SC binding and the tests
//! agree on the same values.

use std::time::Duration;

/// Main presence poll timeout.
pub const DEFAULT_POLL_TIMEOUT_MS: u64 = 1000;

/// Secondary poll used to check the card is still there before a retry.
pub const DEFAULT_LIVENESS_TIMEOUT_MS: u64 = 100;

/// Pause between read attempts.
pub const DEFAULT_RETRY_DELAY_MS: u64 = 500;

/// Pause after a failed presence poll before polling again.
pub const DEFAULT_POLL_ERROR_DELAY_MS: u64 = 1000;

/// Attempts per card occupancy, the first read included.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
