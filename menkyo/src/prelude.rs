// menkyo-rs/menkyo/src/prelude.rs

pub use crate::apdu::{ApduResponse, Command};
pub use crate::card::{CardSnapshot, read_once};
pub use crate::monitor::{Monitor, MonitorConfig, ReadOutcome, StopSignal};
#[cfg(feature = "pcsc")]
pub use crate::session::PcscBackend;
pub use crate::session::{CardBackend, CardSession};
pub use crate::{
    Atr, CardId, CardType, Error, Presence, ReaderStatus, RemainingUseCount, Result,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms};
