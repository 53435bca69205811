//! Run orchestration: wires the dispatcher, ticker, dashboard and shutdown
//! handlers together and prints the final summary.
mod progress;
mod runner;
mod summary;

pub(crate) use runner::run_attack;
