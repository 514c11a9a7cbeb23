// menkyo-rs/menkyo/src/session/traits.rs

use std::time::Duration;

use log::debug;

use crate::apdu::{ApduResponse, Command};
use crate::types::{Atr, ReaderStatus};
use crate::utils::bytes_to_hex_spaced;
use crate::Result;

/// Platform smart-card context. Constructing an implementation establishes
/// the context; dropping it releases it.
pub trait CardBackend {
    /// Reader names in enumeration order.
    fn list_readers(&mut self) -> Result<Vec<String>>;

    /// Connect to the card in `reader`, returning the open session and the
    /// ATR captured at connect time.
    fn connect(&mut self, reader: &str) -> Result<(Box<dyn CardSession>, Atr)>;

    /// Block until the presence of any listed reader changes or `timeout`
    /// elapses. A timeout is not an error: the current view is returned.
    fn wait_for_presence_change(
        &mut self,
        readers: &[String],
        timeout: Duration,
    ) -> Result<Vec<ReaderStatus>>;
}

impl<B: CardBackend + ?Sized> CardBackend for Box<B> {
    fn list_readers(&mut self) -> Result<Vec<String>> {
        (**self).list_readers()
    }

    fn connect(&mut self, reader: &str) -> Result<(Box<dyn CardSession>, Atr)> {
        (**self).connect(reader)
    }

    fn wait_for_presence_change(
        &mut self,
        readers: &[String],
        timeout: Duration,
    ) -> Result<Vec<ReaderStatus>> {
        (**self).wait_for_presence_change(readers, timeout)
    }
}

/// One connected card. Not reentrant; a read attempt owns it exclusively.
pub trait CardSession {
    /// Send raw APDU bytes. `Err` means the exchange itself failed; a
    /// rejecting status word is still `Ok`.
    fn transmit(&mut self, apdu: &[u8]) -> Result<ApduResponse>;

    /// Release the card. Further transmits fail.
    fn disconnect(&mut self) -> Result<()>;

    /// Send a catalog command, logging the exchange.
    fn send(&mut self, command: Command) -> Result<ApduResponse> {
        let result = self.transmit(command.bytes());
        match &result {
            Ok(resp) => debug!(
                "{} [{}] -> {} {}",
                command.name(),
                bytes_to_hex_spaced(command.bytes()),
                resp.status(),
                bytes_to_hex_spaced(resp.data())
            ),
            Err(e) => debug!(
                "{} [{}] failed: {}",
                command.name(),
                bytes_to_hex_spaced(command.bytes()),
                e
            ),
        }
        result
    }
}
