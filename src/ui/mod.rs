//! Terminal dashboard for a running attack.
pub mod model;
pub mod render;
