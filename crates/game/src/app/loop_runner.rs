use std::process::ExitCode;

use engine::run_headless;
use tracing::{error, info};

use super::bootstrap::AppWiring;

pub(crate) fn run(app: AppWiring) -> ExitCode {
    match run_headless(app.config, app.scene) {
        Ok(summary) => {
            info!(
                ticks_run = summary.ticks_run,
                simulated_seconds = summary.simulated_seconds,
                stop_reason = ?summary.stop_reason,
                dropped_backlog_ms = summary.dropped_backlog.as_millis() as u64,
                tps = summary.metrics.tps,
                tick_time_ms = summary.metrics.tick_time_ms,
                "run_complete"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "run_failed");
            ExitCode::FAILURE
        }
    }
}
