//! Status poll timer
//!
//! A repeating tick source the controller turns into status polls. The timer
//! runs as its own task and is cancelled when its handle is dropped.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Handle to a running poll timer; dropping it stops the timer
#[derive(Debug)]
pub struct PollerHandle {
    task: JoinHandle<()>,
    period: Duration,
}

impl PollerHandle {
    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stop the timer and release the handle
    pub fn cancel(self) {
        self.task.abort();
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn a timer that sends a tick every `period`
///
/// The first tick fires one full period after spawning. Ticks that pile up
/// while the receiver is busy are collapsed rather than burst.
pub fn spawn_status_poller(period: Duration) -> (PollerHandle, mpsc::UnboundedReceiver<()>) {
    // tokio intervals panic on a zero period
    let period = period.max(Duration::from_millis(1));
    let (tick_tx, tick_rx) = mpsc::unbounded_channel();

    let task = tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if tick_tx.send(()).is_err() {
                tracing::debug!("status poller stopped: receiver dropped");
                break;
            }
        }
    });

    (PollerHandle { task, period }, tick_rx)
}
