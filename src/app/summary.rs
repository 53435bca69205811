use std::io::Write;

use crate::attack::CounterSnapshot;
use crate::error::AppResult;
use crate::ui::render::format_percent_x100;

/// Plain-text copy of the last dashboard frame, printed after the terminal
/// is restored.
pub(crate) fn summary_lines(target_url: &str, snapshot: &CounterSnapshot) -> Vec<String> {
    vec![
        format!("Target: {}", target_url),
        format!("Current rate: {} req/s", snapshot.displayed_rate),
        format!("Time passed: {} s", snapshot.elapsed_seconds),
        format!("Total successes: {}", snapshot.total_successes),
        format!("Total fails: {}", snapshot.total_failures),
        format!(
            "Success rate (%): {}",
            format_percent_x100(snapshot.success_rate_x100())
        ),
    ]
}

pub(crate) fn print_summary(target_url: &str, snapshot: &CounterSnapshot) -> AppResult<()> {
    let mut out = std::io::stdout().lock();
    for line in summary_lines(target_url, snapshot) {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}
