use std::time::{Duration, Instant};

/// Tick rate and mean tick cost over one reporting window, or over the whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoopMetricsSnapshot {
    pub tps: f32,
    pub tick_time_ms: f32,
    pub total_ticks: u64,
}

#[derive(Debug, Clone, Copy, Default)]
struct TickWindow {
    ticks: u64,
    tick_time_sum: Duration,
}

impl TickWindow {
    fn record(&mut self, tick_time: Duration) {
        self.ticks = self.ticks.saturating_add(1);
        self.tick_time_sum = self.tick_time_sum.saturating_add(tick_time);
    }

    fn snapshot(&self, elapsed: Duration, total_ticks: u64) -> LoopMetricsSnapshot {
        let elapsed_seconds = elapsed.as_secs_f32().max(f32::EPSILON);
        let tick_time_ms = if self.ticks == 0 {
            0.0
        } else {
            (self.tick_time_sum.as_secs_f32() / self.ticks as f32) * 1000.0
        };
        LoopMetricsSnapshot {
            tps: self.ticks as f32 / elapsed_seconds,
            tick_time_ms,
            total_ticks,
        }
    }
}

/// Collects tick timings for the periodic `loop_metrics` line and for the run summary.
#[derive(Debug)]
pub(crate) struct MetricsAccumulator {
    run_start: Instant,
    interval_start: Instant,
    interval: Duration,
    window: TickWindow,
    run: TickWindow,
}

impl MetricsAccumulator {
    pub(crate) fn new(interval: Duration) -> Self {
        Self::starting_at(Instant::now(), interval)
    }

    pub(crate) fn starting_at(start: Instant, interval: Duration) -> Self {
        Self {
            run_start: start,
            interval_start: start,
            interval,
            window: TickWindow::default(),
            run: TickWindow::default(),
        }
    }

    pub(crate) fn record_tick(&mut self, tick_time: Duration) {
        self.window.record(tick_time);
        self.run.record(tick_time);
    }

    /// Closes the current window once `interval` has elapsed.
    pub(crate) fn maybe_snapshot(
        &mut self,
        now: Instant,
        total_ticks: u64,
    ) -> Option<LoopMetricsSnapshot> {
        let elapsed = now.saturating_duration_since(self.interval_start);
        if elapsed < self.interval {
            return None;
        }

        let snapshot = self.window.snapshot(elapsed, total_ticks);
        self.interval_start = now;
        self.window = TickWindow::default();
        Some(snapshot)
    }

    /// Averages since the accumulator started, independent of window resets.
    pub(crate) fn run_snapshot(&self, now: Instant) -> LoopMetricsSnapshot {
        let elapsed = now.saturating_duration_since(self.run_start);
        self.run.snapshot(elapsed, self.run.ticks)
    }
}
