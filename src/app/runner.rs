use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::args::{AttackArgs, PositiveU64};
use crate::attack::{
    AttackConfig, AttackCounters, CounterSnapshot, build_client, build_request_template,
    spawn_aggregation_ticker, spawn_dispatcher,
};
use crate::error::AppResult;
use crate::shutdown::{ShutdownReceiver, ShutdownSender, shutdown_channel};
use crate::shutdown_handlers::{setup_keyboard_shutdown_handler, setup_signal_shutdown_handler};
use crate::ui::{model::UiSettings, render::setup_render_ui};

use super::{progress, summary};

/// Runs one attack until the operator quits, a signal arrives, or the
/// optional duration elapses.
///
/// In-flight requests are not awaited; they are abandoned with the runtime.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be built, the dashboard
/// cannot take over the terminal, or the final summary cannot be written.
/// All of these happen before the first dispatch except the last.
pub(crate) async fn run_attack(args: &AttackArgs, config: AttackConfig) -> AppResult<()> {
    let client = build_client(&config)?;
    let request_template = Arc::new(build_request_template(&client, &config.target_url)?);
    let counters = Arc::new(AttackCounters::new());
    let (shutdown_tx, mut shutdown_rx) = shutdown_channel();
    let (snapshot_tx, snapshot_rx) = watch::channel(CounterSnapshot::default());

    // Every task listening for shutdown subscribes here, before any quit
    // source exists.
    let ticker_shutdown_rx = shutdown_tx.subscribe();
    let dispatcher_shutdown_rx = shutdown_tx.subscribe();
    let duration_shutdown_rx = shutdown_tx.subscribe();

    let ui_enabled = args.dashboard_enabled();
    if !ui_enabled && !args.no_ui {
        info!("UI disabled because stdout is not a TTY.");
    }
    info!(
        url = %config.target_url,
        rps = config.requests_per_second.get(),
        "Starting attack."
    );

    let render_handle = if ui_enabled {
        let settings = UiSettings {
            target_url: config.target_url.to_string(),
            no_color: args.no_color,
        };
        setup_render_ui(settings, &shutdown_tx, snapshot_rx.clone())?
    } else {
        progress::setup_progress_printer(&shutdown_tx, snapshot_rx.clone(), args.no_color)
    };
    let duration_handle = setup_duration_limit(
        args.duration,
        &shutdown_tx,
        duration_shutdown_rx,
        snapshot_rx,
    );
    let ticker_handle = spawn_aggregation_ticker(&counters, snapshot_tx, ticker_shutdown_rx);
    let dispatcher_handle = spawn_dispatcher(
        config.requests_per_second,
        client,
        request_template,
        &counters,
        dispatcher_shutdown_rx,
    );

    let keyboard_shutdown_handle = if ui_enabled {
        setup_keyboard_shutdown_handler(&shutdown_tx)
    } else {
        tokio::spawn(async {})
    };
    let signal_shutdown_handle = setup_signal_shutdown_handler(&shutdown_tx);

    // Any outcome, including lag from a second quit signal, means stop.
    drop(shutdown_rx.recv().await);

    let results = [
        ("keyboard handler", keyboard_shutdown_handle.await),
        ("signal handler", signal_shutdown_handle.await),
        ("renderer", render_handle.await),
        ("duration limit", duration_handle.await),
        ("aggregation ticker", ticker_handle.await),
        ("dispatcher", dispatcher_handle.await),
    ];
    for (task, result) in results {
        if let Err(err) = result {
            warn!("{} task failed: {}", task, err);
        }
    }

    let final_snapshot = counters.snapshot();
    info!(
        successes = final_snapshot.total_successes,
        failures = final_snapshot.total_failures,
        elapsed_seconds = final_snapshot.elapsed_seconds,
        partial_window = final_snapshot.current_second_rate,
        "Attack stopped."
    );
    summary::print_summary(config.target_url.as_str(), &final_snapshot)?;
    Ok(())
}

/// Broadcasts shutdown once `limit` windows have been published.
fn setup_duration_limit(
    limit: Option<PositiveU64>,
    shutdown_tx: &ShutdownSender,
    mut shutdown_rx: ShutdownReceiver,
    mut snapshot_rx: watch::Receiver<CounterSnapshot>,
) -> tokio::task::JoinHandle<()> {
    let Some(limit) = limit else {
        return tokio::spawn(async {});
    };
    let shutdown_tx = shutdown_tx.clone();

    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => break,
                res = snapshot_rx.changed() => {
                    if res.is_err() {
                        break;
                    }
                    let elapsed = snapshot_rx.borrow_and_update().elapsed_seconds;
                    if elapsed >= limit.get() {
                        debug!("Duration of {}s reached.", limit.get());
                        drop(shutdown_tx.send(()));
                        break;
                    }
                }
            }
        }
    })
}
