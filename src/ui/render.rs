mod dashboard;
mod formatting;
mod frame;
mod lifecycle;
mod spinner;
mod theme;


pub use formatting::format_percent_x100;
pub use lifecycle::setup_render_ui;
