use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{info, warn};

use super::metrics::{LoopMetricsSnapshot, MetricsAccumulator};
use super::scene::SceneRuntime;
use super::{Scene, SceneCommand};

#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub target_tps: u32,
    pub max_frame_delta: Duration,
    pub max_ticks_per_frame: u32,
    pub metrics_log_interval: Duration,
    /// Stop after this many ticks. Required when `realtime` is off.
    pub max_ticks: Option<u64>,
    /// Pace ticks against the wall clock. When off, one fixed tick runs per frame with no sleep.
    pub realtime: bool,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            target_tps: 60,
            max_frame_delta: Duration::from_millis(250),
            max_ticks_per_frame: 5,
            metrics_log_interval: Duration::from_secs(1),
            max_ticks: None,
            realtime: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("a headless run without realtime pacing needs max_ticks, otherwise it never stops")]
    UnboundedHeadlessRun,
    #[error("scene aborted after {ticks_run} ticks: {reason}")]
    SceneAborted { ticks_run: u64, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    TickLimit,
    SceneQuit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub ticks_run: u64,
    pub simulated_seconds: f64,
    pub stop_reason: StopReason,
    pub dropped_backlog: Duration,
    /// Wall-clock tick rate and mean tick cost over the whole run.
    pub metrics: LoopMetricsSnapshot,
}

pub fn run_headless(config: LoopConfig, scene: Box<dyn Scene>) -> Result<RunSummary, AppError> {
    if !config.realtime && config.max_ticks.is_none() {
        return Err(AppError::UnboundedHeadlessRun);
    }

    let target_tps = config.target_tps.max(1);
    let max_frame_delta =
        normalize_non_zero_duration(config.max_frame_delta, Duration::from_millis(250));
    let max_ticks_per_frame = config.max_ticks_per_frame.max(1);
    let metrics_log_interval =
        normalize_non_zero_duration(config.metrics_log_interval, Duration::from_secs(1));
    let fixed_dt = Duration::from_secs_f64(1.0 / target_tps as f64);
    let fixed_dt_seconds = fixed_dt.as_secs_f32();

    let mut runtime = SceneRuntime::new(scene);
    runtime.load();
    info!(entity_count = runtime.world().entity_count(), "scene_loaded");
    info!(
        target_tps,
        max_frame_delta_ms = max_frame_delta.as_millis() as u64,
        max_ticks_per_frame,
        metrics_log_interval_ms = metrics_log_interval.as_millis() as u64,
        max_ticks = ?config.max_ticks,
        realtime = config.realtime,
        "loop_config"
    );

    let mut accumulator = Duration::ZERO;
    let mut last_frame_instant = Instant::now();
    let mut metrics_accumulator = MetricsAccumulator::new(metrics_log_interval);
    let mut ticks_run = 0u64;
    let mut dropped_backlog = Duration::ZERO;

    let outcome = 'frames: loop {
        if tick_limit_reached(ticks_run, config.max_ticks) {
            break Ok(StopReason::TickLimit);
        }

        let ticks_this_frame = if config.realtime {
            let now = Instant::now();
            let raw_frame_dt = now.saturating_duration_since(last_frame_instant);
            last_frame_instant = now;
            accumulator =
                accumulator.saturating_add(clamp_frame_delta(raw_frame_dt, max_frame_delta));

            let step_plan = plan_sim_steps(accumulator, fixed_dt, max_ticks_per_frame);
            accumulator = step_plan.remaining_accumulator;
            if step_plan.dropped_backlog > Duration::ZERO {
                dropped_backlog = dropped_backlog.saturating_add(step_plan.dropped_backlog);
                warn!(
                    dropped_backlog_ms = step_plan.dropped_backlog.as_millis() as u64,
                    max_ticks_per_frame, "sim_clamp_triggered"
                );
            }
            step_plan.ticks_to_run
        } else {
            1
        };

        for _ in 0..ticks_this_frame {
            if tick_limit_reached(ticks_run, config.max_ticks) {
                break 'frames Ok(StopReason::TickLimit);
            }

            let tick_started = Instant::now();
            let command = runtime.update(fixed_dt_seconds);
            ticks_run = ticks_run.saturating_add(1);
            metrics_accumulator.record_tick(tick_started.elapsed());

            match command {
                SceneCommand::None => {}
                SceneCommand::Quit => {
                    info!(ticks_run, reason = "scene_quit", "shutdown_requested");
                    break 'frames Ok(StopReason::SceneQuit);
                }
                SceneCommand::Abort(reason) => {
                    warn!(ticks_run, reason = %reason, "scene_aborted");
                    break 'frames Err(AppError::SceneAborted { ticks_run, reason });
                }
            }
        }

        if let Some(snapshot) = metrics_accumulator.maybe_snapshot(Instant::now(), ticks_run) {
            let summary = runtime.debug_summary();
            info!(
                tps = snapshot.tps,
                tick_time_ms = snapshot.tick_time_ms,
                total_ticks = snapshot.total_ticks,
                entity_count = runtime.world().entity_count(),
                summary = summary.as_deref().unwrap_or("-"),
                "loop_metrics"
            );
        }

        if config.realtime {
            let idle = compute_idle_sleep(accumulator, fixed_dt);
            if idle > Duration::ZERO {
                thread::sleep(idle);
            }
        }
    };

    if let Some(summary) = runtime.debug_summary() {
        info!(ticks_run, summary = summary.as_str(), "scene_final_state");
    }
    runtime.unload();
    let metrics = metrics_accumulator.run_snapshot(Instant::now());
    info!(
        ticks_run,
        tps = metrics.tps,
        tick_time_ms = metrics.tick_time_ms,
        "shutdown"
    );

    let stop_reason = outcome?;
    Ok(RunSummary {
        ticks_run,
        simulated_seconds: ticks_run as f64 * fixed_dt.as_secs_f64(),
        stop_reason,
        dropped_backlog,
        metrics,
    })
}

#[derive(Debug, Clone, Copy)]
struct StepPlan {
    ticks_to_run: u32,
    remaining_accumulator: Duration,
    dropped_backlog: Duration,
}

fn plan_sim_steps(
    mut accumulator: Duration,
    fixed_dt: Duration,
    max_ticks_per_frame: u32,
) -> StepPlan {
    let mut ticks_to_run = 0u32;

    while accumulator >= fixed_dt && ticks_to_run < max_ticks_per_frame {
        accumulator = accumulator.saturating_sub(fixed_dt);
        ticks_to_run = ticks_to_run.saturating_add(1);
    }

    if accumulator >= fixed_dt {
        let dropped_backlog = accumulator;
        StepPlan {
            ticks_to_run,
            remaining_accumulator: Duration::ZERO,
            dropped_backlog,
        }
    } else {
        StepPlan {
            ticks_to_run,
            remaining_accumulator: accumulator,
            dropped_backlog: Duration::ZERO,
        }
    }
}

fn tick_limit_reached(ticks_run: u64, max_ticks: Option<u64>) -> bool {
    max_ticks.is_some_and(|limit| ticks_run >= limit)
}

fn clamp_frame_delta(frame_dt: Duration, max_frame_delta: Duration) -> Duration {
    frame_dt.min(max_frame_delta)
}

fn normalize_non_zero_duration(value: Duration, fallback: Duration) -> Duration {
    if value.is_zero() {
        fallback
    } else {
        value
    }
}

/// Time left until the accumulator holds a full fixed step.
fn compute_idle_sleep(accumulator: Duration, fixed_dt: Duration) -> Duration {
    fixed_dt.saturating_sub(accumulator)
}
