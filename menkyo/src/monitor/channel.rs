// menkyo-rs/menkyo/src/monitor/channel.rs
//! Channel delivery for async callers. The monitor loop stays blocking and
//! runs on tokio's blocking pool; outcomes arrive on an unbounded channel.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::monitor::{Monitor, ReadOutcome, StopSignal};
use crate::session::CardBackend;
use crate::{Error, Result};

/// Handle to a monitor running in the background.
pub struct MonitorHandle<B: CardBackend> {
    stop: StopSignal,
    join: JoinHandle<Monitor<B>>,
}

impl<B: CardBackend> MonitorHandle<B> {
    /// Ask the loop to stop without waiting for it.
    pub fn stop(&self) {
        self.stop.stop();
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Stop the loop and get the monitor back once the current poll or
    /// read has finished.
    pub async fn shutdown(self) -> Result<Monitor<B>> {
        self.stop.stop();
        self.join
            .await
            .map_err(|e| Error::Transport(format!("monitor task failed: {}", e)))
    }
}

/// Run `monitor` in the background. Dropping the receiver stops the loop
/// at its next delivery.
pub fn spawn<B>(mut monitor: Monitor<B>) -> (MonitorHandle<B>, mpsc::UnboundedReceiver<ReadOutcome>)
where
    B: CardBackend + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    let stop = monitor.stop_signal();
    let on_closed = stop.clone();

    let join = tokio::task::spawn_blocking(move || {
        monitor.run(|outcome| {
            if tx.send(outcome).is_err() {
                on_closed.stop();
            }
        });
        monitor
    });

    (MonitorHandle { stop, join }, rx)
}
