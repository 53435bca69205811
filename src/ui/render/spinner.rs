use std::time::Duration;

const SPINNER_FRAMES: [&str; 4] = ["∙∙∙", "●∙∙", "∙●∙", "∙∙●"];

/// Seven frames per second.
pub const SPINNER_INTERVAL: Duration = Duration::from_nanos(142_857_143);

#[must_use]
pub fn spinner_symbol(frame: usize) -> &'static str {
    let idx = frame.checked_rem(SPINNER_FRAMES.len()).unwrap_or(0);
    SPINNER_FRAMES.get(idx).copied().unwrap_or(" ")
}
