//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockCard setup so tests across the
//! crate and tests/ directory script the same cards the same way.
#![allow(dead_code)]

use std::time::Duration;

use crate::apdu::Command;
use crate::constants::VEHICLE_INSPECTION_MARKER;
use crate::monitor::MonitorConfig;
use crate::session::{MockBackend, MockCard};

/// Full ATR of a driver's license card.
#[doc(hidden)]
pub const LICENSE_ATR: [u8; 13] = [
    0x3B, 0x88, 0x80, 0x01, 0x00, 0x00, 0x00, 0x00, 0x91, 0x81, 0xC1, 0x00, 0xD8,
];

/// ATR of a contactless card seen through a PC/SC reader.
#[doc(hidden)]
pub const CONTACTLESS_ATR: [u8; 20] = [
    0x3B, 0x8F, 0x80, 0x01, 0x80, 0x4F, 0x0C, 0xA0, 0x00, 0x00, 0x03, 0x06, 0x11, 0x00, 0x3B,
    0x00, 0x00, 0x00, 0x00, 0x42,
];

/// A 17-byte expiry data file.
#[doc(hidden)]
pub const SAMPLE_EXPIRY: [u8; 17] = [
    0x20, 0x24, 0x01, 0x01, 0x20, 0x29, 0x02, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00,
];

const OK: [u8; 2] = [0x90, 0x00];
const NOT_SUPPORTED: [u8; 2] = [0x6A, 0x81];

fn with_data(data: &[u8]) -> Vec<u8> {
    let mut raw = data.to_vec();
    raw.extend_from_slice(&OK);
    raw
}

/// Card that accepts session start/end and the contactless switch.
fn base_card(atr: &[u8]) -> MockCard {
    let mut card = MockCard::new(atr);
    for c in [
        Command::Start,
        Command::StartTransparent,
        Command::SwitchContactless,
        Command::SelectContactless,
        Command::EndTransparent,
    ] {
        card = card.reply(c, &OK);
    }
    card
}

/// A license whose files all answer; the expiry file holds `expiry`.
#[doc(hidden)]
pub fn license_card(expiry: &[u8]) -> MockCard {
    license_card_with_atr(&LICENSE_ATR, expiry)
}

#[doc(hidden)]
pub fn license_card_with_atr(atr: &[u8], expiry: &[u8]) -> MockCard {
    base_card(atr)
        .reply(Command::CheckVehicleInspection, &NOT_SUPPORTED)
        .reply(Command::SelectMasterFile, &OK)
        .reply(Command::QueryRemainingCount, &[0x63, 0xC3])
        .reply(Command::SelectExpiryFile, &OK)
        .reply(Command::ReadExpiry, &with_data(expiry))
        .reply(Command::GetContactlessId, &NOT_SUPPORTED)
}

/// A license that never returns its expiry file.
#[doc(hidden)]
pub fn license_card_without_expiry() -> MockCard {
    base_card(&LICENSE_ATR)
        .reply(Command::CheckVehicleInspection, &NOT_SUPPORTED)
        .reply(Command::SelectMasterFile, &OK)
        .reply(Command::QueryRemainingCount, &[0x63, 0xC3])
        .reply(Command::SelectExpiryFile, &OK)
        .reply(Command::ReadExpiry, &[0x6A, 0x82])
        .reply(Command::GetContactlessId, &NOT_SUPPORTED)
}

/// A vehicle inspection certificate answering the marker check.
#[doc(hidden)]
pub fn vehicle_inspection_card(idm: &[u8]) -> MockCard {
    vehicle_inspection_card_with_atr(&CONTACTLESS_ATR, idm)
}

#[doc(hidden)]
pub fn vehicle_inspection_card_with_atr(atr: &[u8], idm: &[u8]) -> MockCard {
    base_card(atr)
        .reply(
            Command::CheckVehicleInspection,
            &with_data(&VEHICLE_INSPECTION_MARKER),
        )
        .reply(Command::GetContactlessId, &with_data(idm))
}

/// A plain FeliCa card.
#[doc(hidden)]
pub fn felica_card(idm: &[u8]) -> MockCard {
    base_card(&CONTACTLESS_ATR)
        .reply(Command::CheckVehicleInspection, &NOT_SUPPORTED)
        .reply(Command::GetContactlessId, &with_data(idm))
}

/// Monitor config without any waiting.
#[doc(hidden)]
pub fn fast_config() -> MonitorConfig {
    MonitorConfig::default()
        .with_poll_timeout(Duration::ZERO)
        .with_liveness_timeout(Duration::ZERO)
        .with_retry_delay(Duration::ZERO)
        .with_poll_error_delay(Duration::ZERO)
}

/// One reader named `reader` holding `card`.
#[doc(hidden)]
pub fn single_reader(reader: &str, card: MockCard) -> MockBackend {
    MockBackend::new([reader]).with_card(reader, card)
}
