// menkyo-rs/menkyo/src/card/snapshot.rs

use std::time::SystemTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::builder::SnapshotBuilder;
use crate::types::{Atr, CardId, CardType, RemainingUseCount};
use crate::utils::bytes_to_hex;

/// Immutable result of one full read attempt. Holds no reference to the
/// session it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CardSnapshot {
    pub(crate) reader: String,
    pub(crate) card_type: CardType,
    pub(crate) atr: Atr,
    pub(crate) expiry_raw: Vec<u8>,
    pub(crate) remaining_use_count: Option<RemainingUseCount>,
    pub(crate) contactless_id: Vec<u8>,
    pub(crate) card_id: CardId,
    pub(crate) read_at: SystemTime,
}

impl CardSnapshot {
    pub fn builder(reader: impl Into<String>, atr: Atr) -> SnapshotBuilder {
        SnapshotBuilder::new(reader, atr)
    }

    pub fn reader(&self) -> &str {
        &self.reader
    }

    pub fn card_type(&self) -> CardType {
        self.card_type
    }

    pub fn atr(&self) -> &Atr {
        &self.atr
    }

    /// Hex of the raw expiry data file, `None` when it was not read. Left
    /// undecoded; the fixed-width layout is the consumer's business.
    pub fn expiry_date_raw(&self) -> Option<String> {
        (!self.expiry_raw.is_empty()).then(|| bytes_to_hex(&self.expiry_raw))
    }

    pub fn expiry_bytes(&self) -> &[u8] {
        &self.expiry_raw
    }

    pub fn remaining_use_count(&self) -> Option<RemainingUseCount> {
        self.remaining_use_count
    }

    /// Hex of the contactless chip identifier, `None` if the card did not
    /// answer the identity query.
    pub fn contactless_id(&self) -> Option<String> {
        (!self.contactless_id.is_empty()).then(|| bytes_to_hex(&self.contactless_id))
    }

    pub fn contactless_id_bytes(&self) -> &[u8] {
        &self.contactless_id
    }

    pub fn card_id(&self) -> &CardId {
        &self.card_id
    }

    pub fn read_at(&self) -> SystemTime {
        self.read_at
    }

    /// Whether this read is complete enough to stop retrying: a license
    /// needs its expiry data, any other card type has no stronger signal.
    pub fn is_complete(&self) -> bool {
        !self.card_type.is_license() || !self.expiry_raw.is_empty()
    }
}
