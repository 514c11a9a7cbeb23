// helpers.rs: drive a monitor against the scripted backend

use menkyo::monitor::{Monitor, ReadOutcome};
use menkyo::session::{CardBackend, MockBackend};
use menkyo::types::ReaderStatus;

/// Run `n` poll cycles and collect every outcome.
pub fn poll_n<B: CardBackend>(monitor: &mut Monitor<B>, n: usize) -> Vec<ReadOutcome> {
    let mut outcomes = Vec::new();
    for _ in 0..n {
        monitor.poll_once(&mut |o| outcomes.push(o)).unwrap();
    }
    outcomes
}

/// Script `reader` as present with `atr` for the next poll.
pub fn present(backend: &mut MockBackend, reader: &str, atr: &[u8]) {
    backend.push_presence(vec![ReaderStatus::present(reader, atr)]);
}

pub fn empty(backend: &mut MockBackend, reader: &str) {
    backend.push_presence(vec![ReaderStatus::empty(reader)]);
}
