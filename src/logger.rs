use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global subscriber. Logs go to stderr so they never mix with
/// the final summary on stdout.
///
/// While the dashboard owns the terminal only warnings and errors are shown
/// by default; `VOLLEY_LOG`/`RUST_LOG` still override that.
pub fn init_logging(verbose: bool, no_color: bool, dashboard: bool) {
    let filter = std::env::var("VOLLEY_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| EnvFilter::new(default_directive(verbose, dashboard)),
            |value| {
                EnvFilter::try_new(value)
                    .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, dashboard)))
            },
        );

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

const fn default_directive(verbose: bool, dashboard: bool) -> &'static str {
    if dashboard {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}
