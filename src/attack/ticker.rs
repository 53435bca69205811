use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{Instant, interval_at};
use tracing::trace;

use crate::shutdown::ShutdownReceiver;

use super::counters::{AttackCounters, CounterSnapshot};

/// Length of one aggregation window.
pub const WINDOW: Duration = Duration::from_secs(1);

/// Spawns the aggregation ticker. Every [`WINDOW`] it rolls the counters and
/// publishes the resulting snapshot; the first roll happens one window after
/// start.
#[must_use]
pub fn spawn_aggregation_ticker(
    counters: &Arc<AttackCounters>,
    snapshot_tx: watch::Sender<CounterSnapshot>,
    mut shutdown_rx: ShutdownReceiver,
) -> tokio::task::JoinHandle<()> {
    let counters = Arc::clone(counters);

    tokio::spawn(async move {
        let now = Instant::now();
        let first = now.checked_add(WINDOW).unwrap_or(now);
        let mut window_tick = interval_at(first, WINDOW);
        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => break,
                _ = window_tick.tick() => {
                    let snapshot = counters.roll_window();
                    trace!(?snapshot, "window closed");
                    snapshot_tx.send_replace(snapshot);
                }
            }
        }
    })
}
