//! Fixed-rate request dispatch and the shared counters it feeds.
//!
//! The scheduler launches one GET per tick without waiting for earlier
//! requests, every issuer task classifies its response into
//! [`AttackCounters`], and the aggregation ticker rolls the per-second
//! dispatch count into a displayed rate once per second.
mod config;
mod counters;
mod issuer;
mod outcome;
mod scheduler;
mod ticker;


pub use config::AttackConfig;
pub use counters::{AttackCounters, CounterSnapshot};
pub use issuer::{build_client, build_request_template};
pub use scheduler::spawn_dispatcher;
pub use ticker::spawn_aggregation_ticker;
