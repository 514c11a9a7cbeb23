// menkyo-rs/menkyo/src/constants.rs
//! Protocol constants shared across the crate. These are hardware values
//! and must match byte-for-byte.

/// Status word reported for a successful APDU: 0x90 0x00
pub const SW_SUCCESS: (u8, u8) = (0x90, 0x00);

/// Minimal response length: SW1 + SW2
pub const APDU_MIN_RESPONSE_LEN: usize = 2;

/// Receive buffer size used for every transmit (256 data bytes + SW1/SW2)
pub const APDU_MAX_RESPONSE_LEN: usize = 258;

/// ATR prefix shared by all Japanese driver's license cards.
/// Hex form: `3B888001000000`
pub const DRIVER_LICENSE_ATR_PREFIX: [u8; 7] = [0x3B, 0x88, 0x80, 0x01, 0x00, 0x00, 0x00];

/// Response data returned by a vehicle inspection certificate (車検証) to
/// the inspection marker check.
pub const VEHICLE_INSPECTION_MARKER: [u8; 6] = [0x06, 0x78, 0x77, 0x81, 0x02, 0x80];

/// Mask applied to SW2 of the remaining-count query.
pub const REMAINING_COUNT_MASK: u8 = 0x0F;
