// menkyo-rs/menkyo/src/monitor/retry.rs

use std::time::Duration;

use log::{debug, info, warn};

use crate::card::read_once;
use crate::monitor::ReadOutcome;
use crate::monitor::config::MonitorConfig;
use crate::monitor::state::ReaderPresenceState;
use crate::monitor::stop::StopSignal;
use crate::session::CardBackend;
use crate::types::Presence;
use crate::Error;

/// Short liveness poll before a retry. Only an explicit `Empty` for
/// `reader` counts as removed; a failed poll or an undeterminable state
/// lets the retry go ahead.
///
/// Best effort: a card swapped for another within the poll window is not
/// noticed here.
fn card_removed<B: CardBackend + ?Sized>(
    backend: &mut B,
    readers: &[String],
    reader: &str,
    timeout: Duration,
) -> bool {
    match backend.wait_for_presence_change(readers, timeout) {
        Ok(statuses) => statuses
            .iter()
            .any(|s| s.reader == reader && s.presence == Presence::Empty),
        Err(e) => {
            debug!("{}: liveness poll failed, retrying anyway: {}", reader, e);
            false
        }
    }
}

/// Read the card in `reader` until the snapshot is complete or the attempt
/// budget runs out. Always produces exactly one outcome and leaves `slot`
/// settled, or cleared if the card was pulled between attempts.
pub(crate) fn read_with_retry<B: CardBackend + ?Sized>(
    backend: &mut B,
    config: &MonitorConfig,
    stop: &StopSignal,
    readers: &[String],
    reader: &str,
    slot: &mut ReaderPresenceState,
) -> ReadOutcome {
    let max_attempts = config.max_attempts.max(1);
    let mut snapshot = None;
    let mut last_error = None;

    while slot.attempts() < max_attempts {
        if slot.attempts() > 0 {
            if !stop.sleep(config.retry_delay) {
                slot.settle();
                return ReadOutcome::failed(reader, snapshot, Error::Cancelled);
            }
            if card_removed(backend, readers, reader, config.liveness_timeout) {
                info!("{}: card removed during retry", reader);
                slot.clear();
                return ReadOutcome::failed(reader, snapshot, Error::RemovedDuringRetry);
            }
        }

        let attempt = slot.record_attempt();
        match read_once(backend, reader) {
            Ok(snap) if snap.is_complete() => {
                slot.settle();
                return ReadOutcome::succeeded(reader, snap);
            }
            Ok(snap) => {
                debug!("{}: attempt {}/{} incomplete", reader, attempt, max_attempts);
                snapshot = Some(snap);
                last_error = None;
            }
            Err(e) => {
                warn!("{}: attempt {}/{} failed: {}", reader, attempt, max_attempts, e);
                last_error = Some(e);
            }
        }
    }

    slot.settle();
    let error = last_error.unwrap_or(Error::IncompleteRead {
        attempts: slot.attempts(),
    });
    warn!("{}: giving up: {}", reader, error);
    ReadOutcome::failed(reader, snapshot, error)
}
