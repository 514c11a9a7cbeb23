// menkyo-rs/menkyo/src/card/builder.rs

use std::time::SystemTime;

use crate::card::identity::derive_card_id;
use crate::card::license::LicenseFields;
use crate::card::snapshot::CardSnapshot;
use crate::types::{Atr, CardType};

/// Assembles a [`CardSnapshot`] once every step of a read has run. The
/// identifier is derived at `build` time so it always matches the fields.
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    reader: String,
    atr: Atr,
    card_type: CardType,
    license: LicenseFields,
    contactless_id: Vec<u8>,
    read_at: Option<SystemTime>,
}

impl SnapshotBuilder {
    pub fn new(reader: impl Into<String>, atr: Atr) -> Self {
        Self {
            reader: reader.into(),
            atr,
            card_type: CardType::Other,
            license: LicenseFields::default(),
            contactless_id: Vec::new(),
            read_at: None,
        }
    }

    pub fn card_type(mut self, card_type: CardType) -> Self {
        self.card_type = card_type;
        self
    }

    pub fn license(mut self, fields: LicenseFields) -> Self {
        self.license = fields;
        self
    }

    pub fn contactless_id(mut self, id: Vec<u8>) -> Self {
        self.contactless_id = id;
        self
    }

    /// Override the completion time (defaults to now).
    pub fn read_at(mut self, at: SystemTime) -> Self {
        self.read_at = Some(at);
        self
    }

    pub fn build(self) -> CardSnapshot {
        let card_id = derive_card_id(
            self.card_type,
            &self.atr,
            &self.license.expiry_raw,
            &self.contactless_id,
        );
        CardSnapshot {
            reader: self.reader,
            card_type: self.card_type,
            atr: self.atr,
            expiry_raw: self.license.expiry_raw,
            remaining_use_count: self.license.remaining_use_count,
            contactless_id: self.contactless_id,
            card_id,
            read_at: self.read_at.unwrap_or_else(SystemTime::now),
        }
    }
}
