use std::io::{IsTerminal, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use tokio::sync::watch;

use crate::attack::CounterSnapshot;
use crate::shutdown::ShutdownSender;
use crate::ui::render::format_percent_x100;

/// Headless stand-in for the dashboard: one stderr line per window.
pub(crate) fn setup_progress_printer(
    shutdown_tx: &ShutdownSender,
    mut snapshot_rx: watch::Receiver<CounterSnapshot>,
    no_color: bool,
) -> tokio::task::JoinHandle<()> {
    let mut shutdown_rx = shutdown_tx.subscribe();
    let colored = !no_color && std::io::stderr().is_terminal();

    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => break,
                res = snapshot_rx.changed() => {
                    if res.is_err() {
                        break;
                    }
                    let snapshot = *snapshot_rx.borrow_and_update();
                    if render_progress_line(&build_progress_line(&snapshot), colored).is_err() {
                        break;
                    }
                }
            }
        }
    })
}

fn render_progress_line(line: &[ProgressSegment], colored: bool) -> Result<(), std::io::Error> {
    let mut out = std::io::stderr().lock();
    for segment in line {
        match segment.color {
            Some(color) if colored => {
                queue!(
                    out,
                    SetForegroundColor(color),
                    Print(&segment.text),
                    ResetColor
                )?;
            }
            Some(_) | None => queue!(out, Print(&segment.text))?,
        }
    }
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

fn build_progress_line(snapshot: &CounterSnapshot) -> Vec<ProgressSegment> {
    vec![
        ProgressSegment::plain(format!("[{}s] rate: ", snapshot.elapsed_seconds)),
        ProgressSegment::colored(snapshot.displayed_rate.to_string(), RATE_COLOR),
        ProgressSegment::plain(" req/s | successes: ".to_owned()),
        ProgressSegment::colored(snapshot.total_successes.to_string(), SUCCESS_COLOR),
        ProgressSegment::plain(" | fails: ".to_owned()),
        ProgressSegment::colored(snapshot.total_failures.to_string(), FAIL_COLOR),
        ProgressSegment::plain(" | success rate: ".to_owned()),
        ProgressSegment::colored(
            format!("{}%", format_percent_x100(snapshot.success_rate_x100())),
            SUCCESS_COLOR,
        ),
    ]
}

const RATE_COLOR: Color = Color::Rgb {
    r: 0x00,
    g: 0xa5,
    b: 0xd4,
};
const SUCCESS_COLOR: Color = Color::Rgb {
    r: 0x00,
    g: 0xcc,
    b: 0x3e,
};
const FAIL_COLOR: Color = Color::Rgb {
    r: 0xcc,
    g: 0x00,
    b: 0x00,
};

struct ProgressSegment {
    text: String,
    color: Option<Color>,
}

impl ProgressSegment {
    const fn plain(text: String) -> Self {
        Self { text, color: None }
    }

    const fn colored(text: String, color: Color) -> Self {
        Self {
            text,
            color: Some(color),
        }
    }
}
