// menkyo-rs/menkyo/src/monitor/mod.rs
//! Continuous card monitoring.
//!
//! A [`Monitor`] polls every reader for presence changes, reads each newly
//! inserted card (with retries) and hands exactly one [`ReadOutcome`] per
//! insertion to the caller. Everything runs on the calling thread.

pub mod config;
pub mod state;
pub mod stop;

#[cfg(feature = "async")]
pub mod channel;

mod retry;

pub use config::MonitorConfig;
pub use state::{ReaderPresenceState, SlotPhase, SlotTable};
pub use stop::StopSignal;

use log::{debug, info, trace, warn};

use crate::card::{self, CardSnapshot};
use crate::session::CardBackend;
use crate::types::{Atr, Presence};
use crate::{Error, Result};

/// Terminal result for one card occupancy.
///
/// On success `snapshot` is set and `error` is `None`. On failure `error`
/// is set and `snapshot` holds the last (partial) read, if any attempt
/// got that far.
#[derive(Debug)]
pub struct ReadOutcome {
    pub reader: String,
    pub snapshot: Option<CardSnapshot>,
    pub error: Option<Error>,
}

impl ReadOutcome {
    pub fn succeeded(reader: impl Into<String>, snapshot: CardSnapshot) -> Self {
        Self {
            reader: reader.into(),
            snapshot: Some(snapshot),
            error: None,
        }
    }

    pub fn failed(reader: impl Into<String>, snapshot: Option<CardSnapshot>, error: Error) -> Self {
        Self {
            reader: reader.into(),
            snapshot,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Presence-driven card monitor over any [`CardBackend`].
pub struct Monitor<B: CardBackend> {
    backend: B,
    config: MonitorConfig,
    readers: Vec<String>,
    slots: SlotTable,
    stop: StopSignal,
}

impl<B: CardBackend> Monitor<B> {
    /// Enumerate readers and prepare a slot for each. Having no reader at
    /// all is fatal.
    pub fn new(mut backend: B, config: MonitorConfig) -> Result<Self> {
        let readers = backend.list_readers()?;
        if readers.is_empty() {
            return Err(Error::NoReaders);
        }
        info!("monitoring {} reader(s): {:?}", readers.len(), readers);
        let slots = SlotTable::new(&readers);
        Ok(Self {
            backend,
            config,
            readers,
            slots,
            stop: StopSignal::new(),
        })
    }

    /// Use an externally owned stop signal.
    pub fn with_stop_signal(mut self, stop: StopSignal) -> Self {
        self.stop = stop;
        self
    }

    pub fn stop_signal(&self) -> StopSignal {
        self.stop.clone()
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn readers(&self) -> &[String] {
        &self.readers
    }

    pub fn slot(&self, reader: &str) -> Option<&ReaderPresenceState> {
        self.slots.get(reader)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// One read of `reader` without retry or dedup.
    pub fn read_once(&mut self, reader: &str) -> Result<CardSnapshot> {
        card::read_once(&mut self.backend, reader)
    }

    /// Poll until the stop signal fires, passing each outcome to
    /// `on_result`. Poll errors never end the loop: they are logged, waited
    /// out and followed by a reader refresh.
    pub fn run<F: FnMut(ReadOutcome)>(&mut self, mut on_result: F) {
        info!("monitor started");
        while !self.stop.is_stopped() {
            if let Err(e) = self.poll_once(&mut on_result) {
                warn!("presence poll failed: {}", e);
                if !self.stop.sleep(self.config.poll_error_delay) {
                    break;
                }
                self.refresh_readers();
            }
        }
        info!("monitor stopped");
    }

    /// One presence poll and the processing it triggers. Returns how many
    /// outcomes were delivered.
    pub fn poll_once<F: FnMut(ReadOutcome)>(&mut self, on_result: &mut F) -> Result<usize> {
        let statuses = self
            .backend
            .wait_for_presence_change(&self.readers, self.config.poll_timeout)?;

        let mut delivered = 0;
        for status in statuses {
            match status.presence {
                Presence::Present(atr) => {
                    if let Some(outcome) = self.handle_present(&status.reader, &atr) {
                        on_result(outcome);
                        delivered += 1;
                    }
                }
                Presence::Empty => self.handle_empty(&status.reader),
                Presence::Unknown => trace!("{}: state unknown", status.reader),
            }
        }
        Ok(delivered)
    }

    fn handle_present(&mut self, reader: &str, atr: &Atr) -> Option<ReadOutcome> {
        let key = atr.dedup_key();
        let slot = self.slots.slot_mut(reader);
        if slot.is_settled_for(&key) {
            trace!("{}: card already processed", reader);
            return None;
        }
        if slot.is_present() {
            debug!("{}: different card in slot, starting over", reader);
        }
        info!("{}: card inserted, atr={}", reader, key);
        slot.begin(key);
        Some(retry::read_with_retry(
            &mut self.backend,
            &self.config,
            &self.stop,
            &self.readers,
            reader,
            slot,
        ))
    }

    fn handle_empty(&mut self, reader: &str) {
        if self.slots.slot_mut(reader).clear() {
            info!("{}: card removed", reader);
        }
    }

    /// Re-enumerate readers after a poll failure. An empty or failed
    /// enumeration keeps the previous list.
    fn refresh_readers(&mut self) {
        match self.backend.list_readers() {
            Ok(readers) if readers.is_empty() => warn!("no readers after refresh, keeping previous list"),
            Ok(readers) => {
                if readers != self.readers {
                    info!("reader list changed: {:?}", readers);
                }
                self.slots.sync(&readers);
                self.readers = readers;
            }
            Err(e) => warn!("reader refresh failed: {}", e),
        }
    }
}
