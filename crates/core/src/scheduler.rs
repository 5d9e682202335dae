//! Self-rescheduling tick scheduler.
//!
//! The next step is scheduled only after the current one finishes:
//! the deadline is anchored to step *completion*, not to the previous
//! schedule. Steps therefore never overlap or stack when a step runs
//! long; the trade-off is cumulative drift under slow steps (the loop
//! is self-paced, not wall-clock-locked).

use crate::engine::Engine;
use anyhow::{Context, Result};
use std::time::{Duration, Instant};

#[derive(Debug)]
enum SchedulerState {
    Uninitialized,
    Running {
        interval: Duration,
        next_deadline: Instant,
    },
}

/// Owned scheduling object driving one engine at its advertised rate.
///
/// Constructed once by bootstrap and never duplicated. Two states:
/// `Uninitialized` until [`start`](Self::start) queries the tick rate,
/// then `Running` for the remaining process lifetime.
#[derive(Debug)]
pub struct TickScheduler {
    state: SchedulerState,
}

impl TickScheduler {
    /// A scheduler that has not yet queried the engine.
    pub fn new() -> Self {
        Self {
            state: SchedulerState::Uninitialized,
        }
    }

    /// Query the tick rate exactly once and enter the running state.
    ///
    /// The interval is `1s / rate` by floating-point division, not
    /// rounded, matching the reference `1000 / rate` milliseconds. The
    /// first deadline is "now": the first step runs immediately.
    pub fn start<E: Engine + ?Sized>(&mut self, engine: &E) -> Result<()> {
        if matches!(self.state, SchedulerState::Running { .. }) {
            anyhow::bail!("tick scheduler already started");
        }

        let rate = engine.tick_rate();
        if rate == 0 {
            anyhow::bail!("engine reported a tick rate of zero");
        }

        let interval = Duration::from_secs_f64(1.0 / f64::from(rate));
        tracing::info!(rate, interval_ms = interval.as_secs_f64() * 1000.0, "tick scheduler running");
        self.state = SchedulerState::Running {
            interval,
            next_deadline: Instant::now(),
        };
        Ok(())
    }

    /// Whether [`start`](Self::start) has run.
    pub fn is_running(&self) -> bool {
        matches!(self.state, SchedulerState::Running { .. })
    }

    /// Interval between step completions, once running.
    pub fn interval(&self) -> Option<Duration> {
        match self.state {
            SchedulerState::Running { interval, .. } => Some(interval),
            SchedulerState::Uninitialized => None,
        }
    }

    /// Deadline for the next step, once running.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.state {
            SchedulerState::Running { next_deadline, .. } => Some(next_deadline),
            SchedulerState::Uninitialized => None,
        }
    }

    /// Invoke one simulation step, then move the deadline to
    /// `now + interval`, measured from the step's completion.
    ///
    /// A failed step is fatal: the error propagates and the deadline
    /// is left untouched, so callers stop instead of re-scheduling.
    pub fn run_step<E: Engine + ?Sized>(&mut self, engine: &mut E) -> Result<Instant> {
        let SchedulerState::Running {
            interval,
            next_deadline,
        } = &mut self.state
        else {
            anyhow::bail!("tick scheduler stepped before start");
        };

        engine.step().context("simulation step failed")?;
        *next_deadline = Instant::now() + *interval;
        Ok(*next_deadline)
    }

    /// Block the calling thread until the next deadline has passed.
    ///
    /// No-op when the deadline is already due or the scheduler has not
    /// started.
    pub fn sleep_until_deadline(&self) {
        if let SchedulerState::Running { next_deadline, .. } = self.state {
            if let Some(remaining) = next_deadline.checked_duration_since(Instant::now()) {
                std::thread::sleep(remaining);
            }
        }
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}
