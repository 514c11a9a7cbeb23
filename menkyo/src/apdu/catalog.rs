// menkyo-rs/menkyo/src/apdu/catalog.rs
//! Fixed APDU command table.
//!
//! The `FF xx` commands are reader pseudo-APDUs (transparent session
//! control, contactless switching, GET DATA); the `00 xx` commands go to
//! the license applet itself. None of these are configurable.

/// Bumped whenever a byte sequence below changes.
pub const CATALOG_VERSION: u32 = 1;

const START: [u8; 6] = [0xFF, 0xC2, 0x00, 0x00, 0x01, 0x81];
const START_TRANSPARENT: [u8; 7] = [0xFF, 0xC2, 0x00, 0x00, 0x02, 0x84, 0x00];
const CHECK_VEHICLE_INSPECTION: [u8; 5] = [0xFF, 0xCA, 0x01, 0x00, 0x00];
const SWITCH_CONTACTLESS: [u8; 9] = [0xFF, 0xC2, 0x00, 0x02, 0x04, 0x8F, 0x02, 0x03, 0x04];
// System code FFFF so FeliCa Lite cards answer too.
const SELECT_CONTACTLESS: [u8; 7] = [0xFF, 0x00, 0x50, 0x00, 0x02, 0xFF, 0xFF];
const GET_CONTACTLESS_ID: [u8; 5] = [0xFF, 0xCA, 0x00, 0x00, 0x00];
const SELECT_MASTER_FILE: [u8; 4] = [0x00, 0xA4, 0x00, 0x00];
const QUERY_REMAINING_COUNT: [u8; 4] = [0x00, 0x20, 0x00, 0x81];
const SELECT_EXPIRY_FILE: [u8; 7] = [0x00, 0xA4, 0x02, 0x0C, 0x02, 0x2F, 0x01];
const READ_EXPIRY: [u8; 5] = [0x00, 0xB0, 0x00, 0x00, 0x11];
const END_TRANSPARENT: [u8; 7] = [0xFF, 0xC2, 0x00, 0x00, 0x02, 0x82, 0x00];

/// Symbolic name for every command the reader sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// First initialization command after connect.
    Start,
    /// Second initialization command: open a transparent session.
    StartTransparent,
    /// Query answered with a fixed marker by vehicle inspection certificates.
    CheckVehicleInspection,
    SwitchContactless,
    SelectContactless,
    GetContactlessId,
    /// Select the license master file (MF).
    SelectMasterFile,
    /// VERIFY without data; SW2 low nibble is the remaining count.
    QueryRemainingCount,
    /// Select EF 2F01 holding the expiry data.
    SelectExpiryFile,
    /// READ BINARY, 0x11 bytes.
    ReadExpiry,
    /// Close the transparent session before disconnect.
    EndTransparent,
}

impl Command {
    pub const ALL: [Command; 11] = [
        Command::Start,
        Command::StartTransparent,
        Command::CheckVehicleInspection,
        Command::SwitchContactless,
        Command::SelectContactless,
        Command::GetContactlessId,
        Command::SelectMasterFile,
        Command::QueryRemainingCount,
        Command::SelectExpiryFile,
        Command::ReadExpiry,
        Command::EndTransparent,
    ];

    /// Exact bytes put on the wire.
    pub fn bytes(&self) -> &'static [u8] {
        match self {
            Self::Start => &START,
            Self::StartTransparent => &START_TRANSPARENT,
            Self::CheckVehicleInspection => &CHECK_VEHICLE_INSPECTION,
            Self::SwitchContactless => &SWITCH_CONTACTLESS,
            Self::SelectContactless => &SELECT_CONTACTLESS,
            Self::GetContactlessId => &GET_CONTACTLESS_ID,
            Self::SelectMasterFile => &SELECT_MASTER_FILE,
            Self::QueryRemainingCount => &QUERY_REMAINING_COUNT,
            Self::SelectExpiryFile => &SELECT_EXPIRY_FILE,
            Self::ReadExpiry => &READ_EXPIRY,
            Self::EndTransparent => &END_TRANSPARENT,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "START",
            Self::StartTransparent => "START_TRANS",
            Self::CheckVehicleInspection => "CHECK_SHAKEN",
            Self::SwitchContactless => "SWITCH_FELICA",
            Self::SelectContactless => "SELECT_FELICA",
            Self::GetContactlessId => "GET_FELICA_UID",
            Self::SelectMasterFile => "SELECT_MF",
            Self::QueryRemainingCount => "CHECK_REMAIN",
            Self::SelectExpiryFile => "SELECT_EXPIRE_EF",
            Self::ReadExpiry => "READ_EXPIRE",
            Self::EndTransparent => "SELECT_END",
        }
    }

    /// Reverse lookup, used by the mock binding to attribute raw APDUs.
    pub fn from_bytes(bytes: &[u8]) -> Option<Command> {
        Self::ALL.iter().copied().find(|c| c.bytes() == bytes)
    }
}
