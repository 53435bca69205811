use crate::attack::CounterSnapshot;

/// Dashboard settings fixed for the whole run.
#[derive(Debug, Clone)]
pub struct UiSettings {
    pub target_url: String,
    pub no_color: bool,
}

/// Everything a single frame needs.
#[derive(Debug, Clone)]
pub struct UiRenderData {
    pub target_url: String,
    pub snapshot: CounterSnapshot,
    pub spinner_frame: usize,
    pub no_color: bool,
}

impl UiRenderData {
    #[must_use]
    pub fn new(settings: &UiSettings, snapshot: CounterSnapshot, spinner_frame: usize) -> Self {
        Self {
            target_url: settings.target_url.clone(),
            snapshot,
            spinner_frame,
            no_color: settings.no_color,
        }
    }
}
