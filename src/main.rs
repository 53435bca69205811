mod app;
mod args;
mod attack;
mod entry;
mod error;
mod logger;
mod shutdown;
mod shutdown_handlers;
mod ui;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
