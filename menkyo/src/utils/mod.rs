//! Utilities for menkyo: small, reusable helpers used across the crate.
//!
//! Hex formatting for ATRs and identifiers, plus the timing defaults.

pub mod hex;
pub mod timeout;

pub use self::hex::*;
pub use self::timeout::*;
