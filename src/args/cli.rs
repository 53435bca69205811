use clap::Parser;
use std::io::IsTerminal;
use std::time::Duration;

use super::parsers::{parse_bool_env, parse_duration_arg, parse_positive_u64};
use super::types::PositiveU64;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Minimal fixed-rate HTTP GET load generator with a live terminal dashboard."
)]
pub struct AttackArgs {
    /// Target URL; GET requests only
    #[arg(long, short, env = "VOLLEY_URL")]
    pub url: String,

    /// Requests per second
    #[arg(long, short, env = "VOLLEY_RPS")]
    pub rps: u64,

    /// Stop after this many seconds (runs until quit when unset)
    #[arg(long = "duration", short = 't', value_parser = parse_positive_u64)]
    pub duration: Option<PositiveU64>,

    /// Per-request timeout (supports ms/s/m/h); requests wait indefinitely when unset
    #[arg(long = "timeout", value_parser = parse_duration_arg)]
    pub request_timeout: Option<Duration>,

    /// Number of redirects to follow; 0 reports 3xx responses as-is
    #[arg(long = "redirect-limit", default_value_t = 0)]
    pub redirect_limit: u32,

    /// Disable the dashboard and print one progress line per second
    #[arg(long = "no-tui", alias = "no-ui", env = "VOLLEY_NO_UI", value_parser = parse_bool_env)]
    pub no_ui: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,

    /// Enable verbose logging in headless runs (debug level unless overridden by VOLLEY_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl AttackArgs {
    /// The dashboard runs unless disabled or stdout is not a terminal.
    #[must_use]
    pub fn dashboard_enabled(&self) -> bool {
        !self.no_ui && std::io::stdout().is_terminal()
    }
}
