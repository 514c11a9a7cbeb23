// menkyo-rs/menkyo/src/card/detect.rs
//! Card type detection.
//!
//! Detection is an ordered table of rules over the evidence gathered from
//! the card. The first rule that matches wins; nothing matching means
//! [`CardType::Other`].

use log::debug;

use crate::apdu::Command;
use crate::constants::VEHICLE_INSPECTION_MARKER;
use crate::session::CardSession;
use crate::types::{Atr, CardType};

/// What the detector knows about the card.
#[derive(Debug, Clone, Copy)]
pub struct Evidence<'a> {
    /// Response data of the inspection marker check, `None` if the
    /// exchange failed.
    pub inspection_reply: Option<&'a [u8]>,
    pub atr: &'a Atr,
}

/// One detection rule.
pub type Rule = fn(&Evidence<'_>) -> Option<CardType>;

/// Rules in priority order. The marker check beats the ATR prefix.
pub const RULES: &[Rule] = &[vehicle_inspection_marker, license_atr_prefix];

fn vehicle_inspection_marker(ev: &Evidence<'_>) -> Option<CardType> {
    // 応答データのみ比較する (SW は見ない)
    (ev.inspection_reply? == VEHICLE_INSPECTION_MARKER).then_some(CardType::VehicleInspection)
}

fn license_atr_prefix(ev: &Evidence<'_>) -> Option<CardType> {
    ev.atr.has_license_prefix().then_some(CardType::DriverLicense)
}

/// Apply [`RULES`] to `evidence`.
pub fn classify(evidence: &Evidence<'_>) -> CardType {
    RULES
        .iter()
        .find_map(|rule| rule(evidence))
        .unwrap_or(CardType::Other)
}

/// Query the card and classify it. Never fails: a failed check simply
/// contributes no evidence.
pub fn detect(session: &mut dyn CardSession, atr: &Atr) -> CardType {
    let reply = match session.send(Command::CheckVehicleInspection) {
        Ok(resp) => Some(resp.into_data()),
        Err(e) => {
            debug!("inspection check failed, falling back to ATR: {}", e);
            None
        }
    };
    let card_type = classify(&Evidence {
        inspection_reply: reply.as_deref(),
        atr,
    });
    debug!("detected card type: {}", card_type);
    card_type
}
