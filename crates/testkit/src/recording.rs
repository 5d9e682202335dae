//! Recording engine and queued key source.

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use snakehost_core::{Engine, KeySource};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// One recorded boundary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CallKind {
    /// `init` resolved successfully.
    Init,
    /// `tick_rate` was queried.
    TickRate,
    /// `submit_keypress` received this code.
    Keypress {
        /// The forwarded key code.
        code: u8,
    },
    /// A `step` invocation began.
    StepStart,
    /// A `step` invocation returned successfully.
    StepEnd,
}

/// A boundary call with its offset from engine creation.
#[derive(Debug, Clone, Serialize)]
pub struct Call {
    /// Time since the engine was constructed.
    pub offset: Duration,
    /// Which boundary operation ran.
    pub kind: CallKind,
}

/// Engine double that records every boundary call with a timestamp.
///
/// Failure and latency injection cover the scenarios the driver has to
/// survive: a rejecting `init`, a slow `step`, and a `step` that fails
/// partway through a run.
pub struct RecordingEngine {
    tick_rate: u32,
    fail_init: bool,
    step_delay: Option<Duration>,
    fail_on_step: Option<u64>,
    steps_started: u64,
    created: Instant,
    // RefCell because `tick_rate` is a &self query but still belongs
    // in the call log. The driver is single-threaded, so no borrow is
    // ever held across a call.
    calls: RefCell<Vec<Call>>,
}

impl RecordingEngine {
    /// A well-behaved engine advertising `tick_rate` steps per second.
    pub fn new(tick_rate: u32) -> Self {
        Self {
            tick_rate,
            fail_init: false,
            step_delay: None,
            fail_on_step: None,
            steps_started: 0,
            created: Instant::now(),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Make `init` reject.
    pub fn with_failing_init(mut self) -> Self {
        self.fail_init = true;
        self
    }

    /// Make every `step` take at least `delay`.
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = Some(delay);
        self
    }

    /// Make the `n`-th `step` (1-based) fail.
    pub fn with_failing_step(mut self, n: u64) -> Self {
        self.fail_on_step = Some(n);
        self
    }

    /// Every recorded call, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Number of calls of the given kind.
    pub fn count(&self, kind: &CallKind) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.kind == *kind)
            .count()
    }

    /// Forwarded key codes, in order.
    pub fn codes_forwarded(&self) -> Vec<u8> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call.kind {
                CallKind::Keypress { code } => Some(code),
                _ => None,
            })
            .collect()
    }

    /// `(start, end)` offsets of each completed step, in order.
    pub fn step_spans(&self) -> Vec<(Duration, Duration)> {
        let mut spans = Vec::new();
        let mut open: Option<Duration> = None;
        for call in self.calls.borrow().iter() {
            match call.kind {
                CallKind::StepStart => open = Some(call.offset),
                CallKind::StepEnd => {
                    if let Some(start) = open.take() {
                        spans.push((start, call.offset));
                    }
                }
                _ => {}
            }
        }
        spans
    }

    fn record(&self, kind: CallKind) {
        self.calls.borrow_mut().push(Call {
            offset: self.created.elapsed(),
            kind,
        });
    }
}

#[async_trait]
impl Engine for RecordingEngine {
    async fn init(&mut self) -> Result<()> {
        if self.fail_init {
            anyhow::bail!("engine refused to initialize");
        }
        self.record(CallKind::Init);
        Ok(())
    }

    fn tick_rate(&self) -> u32 {
        self.record(CallKind::TickRate);
        self.tick_rate
    }

    fn submit_keypress(&mut self, code: u8) {
        self.record(CallKind::Keypress { code });
    }

    fn step(&mut self) -> Result<()> {
        self.steps_started += 1;
        self.record(CallKind::StepStart);
        if self.fail_on_step == Some(self.steps_started) {
            anyhow::bail!("simulated engine fault on step {}", self.steps_started);
        }
        if let Some(delay) = self.step_delay {
            std::thread::sleep(delay);
        }
        self.record(CallKind::StepEnd);
        Ok(())
    }
}

/// Key source backed by a pre-loaded queue, drained in order.
#[derive(Debug, Default)]
pub struct QueueSource {
    codes: VecDeque<u8>,
}

impl QueueSource {
    /// Source yielding `codes` in the given order.
    pub fn from_codes(codes: &[u8]) -> Self {
        Self {
            codes: codes.iter().copied().collect(),
        }
    }
}

impl KeySource for QueueSource {
    fn poll_key(&mut self) -> Option<u8> {
        self.codes.pop_front()
    }
}
