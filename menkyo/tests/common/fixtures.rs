// fixtures.rs: commonly used ATRs and file contents

/// Bare license ATR prefix, as used by the documented scenarios.
pub const SHORT_LICENSE_ATR_HEX: &str = "3B888001000000";

/// ATR as read from a real license.
pub const LICENSE_ATR_HEX: &str = "3B888001000000009181C100D8";

/// 17-byte expiry file.
pub const EXPIRY_HEX: &str = "2024010120290210000000000000000000";

pub const IDM_HEX: &str = "012E4CD7F3A15B09";

pub fn decode(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

pub fn short_license_atr() -> Vec<u8> {
    decode(SHORT_LICENSE_ATR_HEX)
}

pub fn license_atr() -> Vec<u8> {
    decode(LICENSE_ATR_HEX)
}

pub fn expiry() -> Vec<u8> {
    decode(EXPIRY_HEX)
}

pub fn idm() -> Vec<u8> {
    decode(IDM_HEX)
}

/// Append a status word to `data`.
pub fn with_sw(data: &[u8], sw1: u8, sw2: u8) -> Vec<u8> {
    let mut raw = data.to_vec();
    raw.push(sw1);
    raw.push(sw2);
    raw
}
