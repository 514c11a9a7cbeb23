// menkyo-rs/menkyo/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("no card readers found")]
    NoReaders,

    #[error("reader not found: {0}")]
    ReaderNotFound(String),

    // PC/SC バインディングは実機環境でのみ有効化する
    #[cfg(feature = "pcsc")]
    #[error("pcsc error: {0}")]
    Pcsc(#[from] pcsc::Error),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to connect to card on {reader}: {reason}")]
    Connect { reader: String, reason: String },

    #[error("response too short: {actual} bytes")]
    ResponseTooShort { actual: usize },

    #[error("{command} rejected: status=({sw1:#04x}, {sw2:#04x})")]
    Protocol {
        command: &'static str,
        sw1: u8,
        sw2: u8,
    },

    #[error("failed to read complete data after {attempts} attempts")]
    IncompleteRead { attempts: u32 },

    #[error("card removed during retry")]
    RemovedDuringRetry,

    #[error("monitor stopped before the read settled")]
    Cancelled,
}

impl Error {
    /// Session or transmit level failure (reader unplugged, card pulled
    /// mid-exchange, garbled frame). Protocol rejections and the synthetic
    /// monitor errors are not transport errors.
    pub fn is_transport(&self) -> bool {
        match self {
            Error::NoReaders
            | Error::ReaderNotFound(_)
            | Error::Transport(_)
            | Error::Connect { .. }
            | Error::ResponseTooShort { .. } => true,
            #[cfg(feature = "pcsc")]
            Error::Pcsc(_) => true,
            Error::Protocol { .. }
            | Error::IncompleteRead { .. }
            | Error::RemovedDuringRetry
            | Error::Cancelled => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
