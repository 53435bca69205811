/// Formats a percentage scaled by 100 with two decimals (`7_550` -> `75.50`).
#[must_use]
pub fn format_percent_x100(value: u64) -> String {
    let whole = value.checked_div(100).unwrap_or(0);
    let frac = value.checked_rem(100).unwrap_or(0);
    format!("{whole}.{frac:02}")
}
