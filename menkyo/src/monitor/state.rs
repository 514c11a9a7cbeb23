// menkyo-rs/menkyo/src/monitor/state.rs
//! Per-reader slot state.
//!
//! ```text
//! Empty --present(key)--> Processing --settle--> Settled
//!   ^                                               |
//!   +------------------- empty ---------------------+
//! ```

use std::collections::HashMap;

/// Phase of one reader slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotPhase {
    #[default]
    Empty,
    /// A card is in the slot and reads are in progress.
    Processing,
    /// The occupancy got its one result; further notifications for the
    /// same key are ignored until the slot empties.
    Settled,
}

/// Transient state the monitor keeps for each reader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReaderPresenceState {
    phase: SlotPhase,
    dedup_key: Option<String>,
    attempts: u32,
}

impl ReaderPresenceState {
    pub fn phase(&self) -> SlotPhase {
        self.phase
    }

    pub fn is_present(&self) -> bool {
        self.phase != SlotPhase::Empty
    }

    pub fn dedup_key(&self) -> Option<&str> {
        self.dedup_key.as_deref()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Already produced a result for the card with `key`.
    pub fn is_settled_for(&self, key: &str) -> bool {
        self.phase == SlotPhase::Settled && self.dedup_key.as_deref() == Some(key)
    }

    /// Start processing a new occupancy.
    pub fn begin(&mut self, key: String) {
        self.phase = SlotPhase::Processing;
        self.dedup_key = Some(key);
        self.attempts = 0;
    }

    pub fn record_attempt(&mut self) -> u32 {
        self.attempts += 1;
        self.attempts
    }

    pub fn settle(&mut self) {
        self.phase = SlotPhase::Settled;
    }

    /// Forget the occupancy. Returns whether anything was forgotten.
    pub fn clear(&mut self) -> bool {
        let was_present = self.is_present();
        *self = Self::default();
        was_present
    }
}

/// Slot states keyed by reader name.
#[derive(Debug, Clone, Default)]
pub struct SlotTable {
    slots: HashMap<String, ReaderPresenceState>,
}

impl SlotTable {
    pub fn new(readers: &[String]) -> Self {
        let mut table = Self::default();
        table.sync(readers);
        table
    }

    pub fn get(&self, reader: &str) -> Option<&ReaderPresenceState> {
        self.slots.get(reader)
    }

    pub fn slot_mut(&mut self, reader: &str) -> &mut ReaderPresenceState {
        self.slots.entry(reader.to_string()).or_default()
    }

    /// Align the table with a fresh enumeration: vanished readers lose
    /// their slot, new ones get an empty one, the rest are untouched.
    pub fn sync(&mut self, readers: &[String]) {
        self.slots.retain(|name, _| readers.contains(name));
        for r in readers {
            self.slots.entry(r.clone()).or_default();
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
