// menkyo-rs/menkyo/src/apdu/response.rs

use derive_more::Display;

use crate::constants::{APDU_MIN_RESPONSE_LEN, SW_SUCCESS};
use crate::{Error, Result};

/// SW1/SW2 pair trailing every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:02X}{:02X}", sw1, sw2)]
pub struct StatusWord {
    pub sw1: u8,
    pub sw2: u8,
}

impl StatusWord {
    pub const SUCCESS: Self = Self {
        sw1: SW_SUCCESS.0,
        sw2: SW_SUCCESS.1,
    };

    pub const fn new(sw1: u8, sw2: u8) -> Self {
        Self { sw1, sw2 }
    }

    pub fn is_success(&self) -> bool {
        *self == Self::SUCCESS
    }
}

/// A response split into payload and status word. The payload is kept for
/// every status word; only `90 00` marks it valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApduResponse {
    data: Vec<u8>,
    status: StatusWord,
}

impl ApduResponse {
    pub fn new(data: Vec<u8>, sw1: u8, sw2: u8) -> Self {
        Self {
            data,
            status: StatusWord::new(sw1, sw2),
        }
    }

    /// Split a raw response (`data || SW1 || SW2`).
    pub fn from_raw(raw: &[u8]) -> Result<Self> {
        if raw.len() < APDU_MIN_RESPONSE_LEN {
            return Err(Error::ResponseTooShort { actual: raw.len() });
        }
        let (data, sw) = raw.split_at(raw.len() - 2);
        Ok(Self::new(data.to_vec(), sw[0], sw[1]))
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn status(&self) -> StatusWord {
        self.status
    }

    pub fn sw1(&self) -> u8 {
        self.status.sw1
    }

    pub fn sw2(&self) -> u8 {
        self.status.sw2
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Payload if the status word is `90 00`, otherwise a protocol error
    /// naming the command.
    pub fn success_data(self, command: &'static str) -> Result<Vec<u8>> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(Error::Protocol {
                command,
                sw1: self.status.sw1,
                sw2: self.status.sw2,
            })
        }
    }
}
