// menkyo-rs/menkyo/src/card/identity.rs
//! Contactless identifier and card ID derivation.

use log::debug;

use crate::apdu::Command;
use crate::session::CardSession;
use crate::types::{Atr, CardId, CardType};
use crate::utils::bytes_to_hex_upper;

/// Switch the reader to the contactless protocol and read the chip's
/// identifier. The switch and select steps are best effort; only the
/// final read decides the result (`None` unless it returns 9000).
pub fn read_contactless_id(session: &mut dyn CardSession) -> Option<Vec<u8>> {
    for command in [Command::SwitchContactless, Command::SelectContactless] {
        if let Err(e) = session.send(command) {
            debug!("{} failed, reading id anyway: {}", command.name(), e);
        }
    }
    match session.send(Command::GetContactlessId) {
        Ok(resp) if resp.is_success() => Some(resp.into_data()),
        Ok(resp) => {
            debug!("contactless id rejected: {}", resp.status());
            None
        }
        Err(e) => {
            debug!("contactless id read failed: {}", e);
            None
        }
    }
}

/// Derive the identifier downstream systems key records by.
///
/// A license is identified by ATR and expiry file together; everything
/// else by its contactless identifier. Pure and deterministic.
pub fn derive_card_id(
    card_type: CardType,
    atr: &Atr,
    expiry_raw: &[u8],
    contactless_id: &[u8],
) -> CardId {
    let id = match card_type {
        CardType::DriverLicense => {
            let mut s = bytes_to_hex_upper(atr.as_bytes());
            s.push_str(&bytes_to_hex_upper(expiry_raw));
            s
        }
        CardType::VehicleInspection | CardType::Other => bytes_to_hex_upper(contactless_id),
    };
    CardId::from_upper(id)
}
