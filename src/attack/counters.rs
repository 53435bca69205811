use std::sync::atomic::{AtomicU64, Ordering};

use super::outcome::RequestOutcome;

/// Counters shared between the dispatcher, every in-flight request and the
/// aggregation ticker.
///
/// Only the ticker writes `displayed_rate` and `elapsed_seconds`.
#[derive(Debug, Default)]
pub struct AttackCounters {
    total_successes: AtomicU64,
    total_failures: AtomicU64,
    current_second_rate: AtomicU64,
    displayed_rate: AtomicU64,
    elapsed_seconds: AtomicU64,
}

/// Point-in-time copy of [`AttackCounters`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub total_successes: u64,
    pub total_failures: u64,
    pub current_second_rate: u64,
    pub displayed_rate: u64,
    pub elapsed_seconds: u64,
}

impl CounterSnapshot {
    /// Requests that reached a counted outcome.
    #[must_use]
    pub const fn completed(&self) -> u64 {
        self.total_successes.saturating_add(self.total_failures)
    }

    /// Success percentage scaled by 100 (`10_000` is 100.00%), rounded half
    /// up to two decimals; 0 when nothing has completed yet.
    #[must_use]
    pub fn success_rate_x100(&self) -> u64 {
        let completed = u128::from(self.completed());
        if completed == 0 {
            return 0;
        }
        let scaled = u128::from(self.total_successes)
            .saturating_mul(10_000)
            .saturating_add(completed.checked_div(2).unwrap_or(0))
            .checked_div(completed)
            .unwrap_or(0);
        u64::try_from(scaled).unwrap_or(u64::MAX)
    }
}

impl AttackCounters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_dispatch(&self) {
        self.current_second_rate.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record(&self, outcome: RequestOutcome) {
        match outcome {
            RequestOutcome::Success => {
                self.total_successes.fetch_add(1, Ordering::Relaxed);
            }
            RequestOutcome::HttpFailure(_) | RequestOutcome::TransportFailure => {
                self.total_failures.fetch_add(1, Ordering::Relaxed);
            }
            RequestOutcome::Uncounted(_) | RequestOutcome::RedirectLimitExceeded => {}
        }
    }

    /// Closes the current window: moves the dispatch count into the displayed
    /// rate, zeroes it and advances elapsed seconds.
    ///
    /// The swap guarantees each concurrent dispatch lands in exactly one
    /// window.
    pub fn roll_window(&self) -> CounterSnapshot {
        let rate = self.current_second_rate.swap(0, Ordering::AcqRel);
        self.displayed_rate.store(rate, Ordering::Release);
        let elapsed_seconds = self
            .elapsed_seconds
            .fetch_add(1, Ordering::AcqRel)
            .saturating_add(1);

        CounterSnapshot {
            total_successes: self.total_successes.load(Ordering::Acquire),
            total_failures: self.total_failures.load(Ordering::Acquire),
            current_second_rate: 0,
            displayed_rate: rate,
            elapsed_seconds,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            total_successes: self.total_successes.load(Ordering::Acquire),
            total_failures: self.total_failures.load(Ordering::Acquire),
            current_second_rate: self.current_second_rate.load(Ordering::Acquire),
            displayed_rate: self.displayed_rate.load(Ordering::Acquire),
            elapsed_seconds: self.elapsed_seconds.load(Ordering::Acquire),
        }
    }
}
