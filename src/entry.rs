use clap::Parser;

use crate::app::run_attack;
use crate::args::AttackArgs;
use crate::attack::AttackConfig;
use crate::error::{AppError, AppResult, ValidationError};

pub(crate) fn run() -> AppResult<()> {
    let args = AttackArgs::parse();

    crate::logger::init_logging(args.verbose, args.no_color, args.dashboard_enabled());

    // Validated before the runtime exists so a bad rate never dispatches.
    let config = AttackConfig::try_from(&args).map_err(|err| {
        tracing::error!("{}", err);
        AppError::validation(err)
    })?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::validation(ValidationError::RuntimeBuildFailed { source: err }))?;

    let result = runtime.block_on(run_attack(&args, config));
    runtime.shutdown_background();
    result
}
