// menkyo-rs/menkyo/src/session/pcsc.rs

#![cfg(feature = "pcsc")]

use std::ffi::CString;
use std::time::Duration;

use log::debug;
use pcsc::{Attribute, Card, Context, Disposition, Protocols, ReaderState, Scope, ShareMode, State};

use crate::apdu::ApduResponse;
use crate::constants::APDU_MAX_RESPONSE_LEN;
use crate::session::traits::{CardBackend, CardSession};
use crate::types::{Atr, Presence, ReaderStatus};
use crate::{Error, Result};

/// PC/SC resource-manager binding (winscard on Windows, pcsc-lite
/// elsewhere).
///
/// Reader states are kept between polls so `get_status_change` blocks
/// until something actually changes instead of returning at once.
pub struct PcscBackend {
    context: Context,
    states: Vec<ReaderState>,
}

impl PcscBackend {
    /// Establish a user-scope context.
    pub fn establish() -> Result<Self> {
        let context = Context::establish(Scope::User)?;
        Ok(Self {
            context,
            states: Vec::new(),
        })
    }

    fn track(&mut self, readers: &[String]) -> Result<()> {
        let unchanged = self.states.len() == readers.len()
            && self
                .states
                .iter()
                .zip(readers)
                .all(|(s, r)| s.name().to_bytes() == r.as_bytes());
        if unchanged {
            return Ok(());
        }

        self.states = readers
            .iter()
            .map(|r| {
                CString::new(r.as_str())
                    .map(|name| ReaderState::new(name, State::UNAWARE))
                    .map_err(|_| Error::ReaderNotFound(r.clone()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(())
    }
}

fn presence_of(state: State, atr: &[u8]) -> Presence {
    if state.contains(State::PRESENT) {
        Presence::Present(Atr::from_bytes(atr))
    } else if state.contains(State::EMPTY) {
        Presence::Empty
    } else {
        Presence::Unknown
    }
}

impl CardBackend for PcscBackend {
    fn list_readers(&mut self) -> Result<Vec<String>> {
        match self.context.list_readers_owned() {
            Ok(names) => Ok(names
                .into_iter()
                .map(|n| n.to_string_lossy().into_owned())
                .collect()),
            Err(pcsc::Error::NoReadersAvailable) => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn connect(&mut self, reader: &str) -> Result<(Box<dyn CardSession>, Atr)> {
        let name = CString::new(reader).map_err(|_| Error::ReaderNotFound(reader.to_string()))?;
        let card = self
            .context
            .connect(&name, ShareMode::Shared, Protocols::T0 | Protocols::T1)
            .map_err(|e| Error::Connect {
                reader: reader.to_string(),
                reason: e.to_string(),
            })?;

        let atr = match card.get_attribute_owned(Attribute::AtrString) {
            Ok(atr) => atr,
            Err(e) => {
                let _ = card.disconnect(Disposition::LeaveCard);
                return Err(e.into());
            }
        };

        let session = PcscSession { card: Some(card) };
        Ok((Box::new(session), Atr::from(atr)))
    }

    fn wait_for_presence_change(
        &mut self,
        readers: &[String],
        timeout: Duration,
    ) -> Result<Vec<ReaderStatus>> {
        self.track(readers)?;

        let timed_out = match self.context.get_status_change(timeout, &mut self.states) {
            Ok(()) => false,
            Err(pcsc::Error::Timeout) => true,
            Err(e) => return Err(e.into()),
        };

        let statuses = self
            .states
            .iter()
            .zip(readers)
            .map(|(s, r)| {
                // On timeout the event state is not refreshed; the last
                // synced state is the current view.
                let state = if timed_out {
                    s.current_state()
                } else {
                    s.event_state()
                };
                ReaderStatus::new(r.clone(), presence_of(state, s.atr()))
            })
            .collect();

        for s in &mut self.states {
            s.sync_current_state();
        }
        Ok(statuses)
    }
}

/// Connected PC/SC card handle.
pub struct PcscSession {
    card: Option<Card>,
}

impl CardSession for PcscSession {
    fn transmit(&mut self, apdu: &[u8]) -> Result<ApduResponse> {
        let card = self
            .card
            .as_ref()
            .ok_or_else(|| Error::Transport("card already disconnected".into()))?;
        let mut buf = [0u8; APDU_MAX_RESPONSE_LEN];
        let raw = card.transmit(apdu, &mut buf)?;
        ApduResponse::from_raw(raw)
    }

    fn disconnect(&mut self) -> Result<()> {
        match self.card.take() {
            Some(card) => card.disconnect(Disposition::LeaveCard).map_err(|(_, e)| {
                debug!("disconnect failed: {}", e);
                Error::from(e)
            }),
            None => Ok(()),
        }
    }
}

impl Drop for PcscSession {
    fn drop(&mut self) {
        let _ = self.disconnect();
    }
}
