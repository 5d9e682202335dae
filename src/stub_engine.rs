use anyhow::Result;
use async_trait::async_trait;
use snakehost_core::Engine;

/// Tick rate of the original snake engine, used when no rate override
/// is given on the command line.
pub const DEFAULT_TICK_RATE: u32 = 12;

/// Stand-in engine that logs what the driver forwards to it.
///
/// The real simulation implements [`Engine`] in its own crate; this
/// stub keeps the binary runnable (and the wiring observable under
/// `RUST_LOG=debug`) without linking one.
pub struct StubEngine {
    tick_rate: u32,
    ticks: u64,
}

impl StubEngine {
    pub fn new(tick_rate: u32) -> Self {
        Self { tick_rate, ticks: 0 }
    }
}

#[async_trait]
impl Engine for StubEngine {
    async fn init(&mut self) -> Result<()> {
        tracing::info!(tick_rate = self.tick_rate, "stub engine ready");
        Ok(())
    }

    fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    fn submit_keypress(&mut self, code: u8) {
        tracing::debug!(code, "keypress");
    }

    fn step(&mut self) -> Result<()> {
        self.ticks += 1;
        tracing::trace!(tick = self.ticks, "step");
        Ok(())
    }
}
