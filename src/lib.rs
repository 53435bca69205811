//! Core library for the `volley` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, the fixed-rate dispatcher with its shared counters, and the
//! terminal dashboard. The primary user-facing interface is the `volley`
//! command-line application.
pub mod args;
pub mod attack;
pub mod error;
pub mod shutdown;
pub mod ui;
