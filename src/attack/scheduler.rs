use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Request};
use tokio::time::interval;
use tracing::debug;

use crate::args::PositiveU64;
use crate::shutdown::ShutdownReceiver;

use super::counters::AttackCounters;
use super::issuer::issue_request;

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Interval between two dispatches for the given rate, never shorter than
/// one nanosecond.
#[must_use]
pub fn dispatch_period(requests_per_second: PositiveU64) -> Duration {
    let nanos = NANOS_PER_SEC
        .checked_div(requests_per_second.get())
        .unwrap_or(1)
        .max(1);
    Duration::from_nanos(nanos)
}

/// Spawns the dispatcher: one request task per tick until shutdown.
///
/// `shutdown_rx` must be subscribed before any quit source can fire.
///
/// Dispatch is fire-and-forget. The dispatcher never waits for a request to
/// finish and never caps how many are in flight, so a target slower than
/// the tick interval accumulates concurrent requests.
#[must_use]
pub fn spawn_dispatcher(
    requests_per_second: PositiveU64,
    client: Client,
    request_template: Arc<Request>,
    counters: &Arc<AttackCounters>,
    mut shutdown_rx: ShutdownReceiver,
) -> tokio::task::JoinHandle<()> {
    let counters = Arc::clone(counters);
    let period = dispatch_period(requests_per_second);

    tokio::spawn(async move {
        let mut dispatch_tick = interval(period);
        let mut dispatched: u64 = 0;
        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => break,
                _ = dispatch_tick.tick() => {
                    counters.record_dispatch();
                    dispatched = dispatched.saturating_add(1);
                    let client = client.clone();
                    let request_template = Arc::clone(&request_template);
                    let counters = Arc::clone(&counters);
                    tokio::spawn(async move {
                        issue_request(&client, &request_template, &counters).await;
                    });
                }
            }
        }
        debug!("Dispatcher stopped after {} requests.", dispatched);
    })
}
