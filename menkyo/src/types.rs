// menkyo-rs/menkyo/src/types.rs

use derive_more::Display;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{DRIVER_LICENSE_ATR_PREFIX, REMAINING_COUNT_MASK};

/// Answer-To-Reset bytes captured at connect time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Atr(Vec<u8>);

impl Atr {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex, the form stored in snapshots.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.0)
    }

    /// Dedup key used by the monitor to recognise a card still in the slot.
    pub fn dedup_key(&self) -> String {
        self.to_hex()
    }

    pub fn has_license_prefix(&self) -> bool {
        self.0.starts_with(&DRIVER_LICENSE_ATR_PREFIX)
    }
}

impl From<Vec<u8>> for Atr {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// カード種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CardType {
    /// 運転免許証
    #[display(fmt = "driver_license")]
    DriverLicense,
    /// 車検証
    #[cfg_attr(feature = "serde", serde(rename = "car_inspection"))]
    #[display(fmt = "car_inspection")]
    VehicleInspection,
    #[display(fmt = "other")]
    Other,
}

impl CardType {
    pub fn is_license(&self) -> bool {
        matches!(self, CardType::DriverLicense)
    }
}

/// Remaining PIN verification count (残り回数), always 0..=15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RemainingUseCount(u8);

impl RemainingUseCount {
    /// Derive the count from SW2 of the remaining-count query.
    pub fn from_sw2(sw2: u8) -> Self {
        Self(sw2 & REMAINING_COUNT_MASK)
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

/// Stable identity string downstream systems key records by.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CardId(String);

impl CardId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn from_upper(s: String) -> Self {
        Self(s)
    }
}

/// Presence reported by the platform binding for one reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presence {
    Empty,
    Present(Atr),
    /// Reader state not determinable (unavailable, mute, ignored).
    Unknown,
}

/// Per-reader result of a presence poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderStatus {
    pub reader: String,
    pub presence: Presence,
}

impl ReaderStatus {
    pub fn new(reader: impl Into<String>, presence: Presence) -> Self {
        Self {
            reader: reader.into(),
            presence,
        }
    }

    pub fn empty(reader: impl Into<String>) -> Self {
        Self::new(reader, Presence::Empty)
    }

    pub fn present(reader: impl Into<String>, atr: &[u8]) -> Self {
        Self::new(reader, Presence::Present(Atr::from_bytes(atr)))
    }
}
