use std::io::Stdout;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::watch;
use tokio::time::interval;

use crate::attack::CounterSnapshot;
use crate::error::AppResult;
use crate::shutdown::ShutdownSender;
use crate::ui::model::{UiRenderData, UiSettings};

use super::dashboard::{Ui, UiActions};
use super::spinner::SPINNER_INTERVAL;

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        Ui::cleanup();
    }
}

/// Takes over the terminal and spawns the render loop.
///
/// The loop redraws on every published window snapshot and on every spinner
/// frame, and restores the terminal when shutdown is broadcast.
///
/// # Errors
///
/// Returns an error when the terminal cannot be switched to raw mode or the
/// alternate screen. Nothing is spawned in that case.
pub fn setup_render_ui(
    settings: UiSettings,
    shutdown_tx: &ShutdownSender,
    mut snapshot_rx: watch::Receiver<CounterSnapshot>,
) -> AppResult<tokio::task::JoinHandle<()>> {
    let terminal = Ui::setup_terminal()?;
    let guard = TerminalGuard;
    let mut shutdown_rx = shutdown_tx.subscribe();

    Ok(tokio::spawn(async move {
        let _guard = guard;
        let mut terminal: Terminal<CrosstermBackend<Stdout>> = terminal;
        let mut spinner_tick = interval(SPINNER_INTERVAL);
        let mut spinner_frame: usize = 0;

        loop {
            let snapshot = *snapshot_rx.borrow_and_update();
            let data = UiRenderData::new(&settings, snapshot, spinner_frame);
            Ui::render(&mut terminal, &data);

            tokio::select! {
                _ = shutdown_rx.recv() => break,
                res = snapshot_rx.changed() => {
                    if res.is_err() {
                        break;
                    }
                }
                _ = spinner_tick.tick() => {
                    spinner_frame = spinner_frame.wrapping_add(1);
                }
            }
        }
    }))
}
