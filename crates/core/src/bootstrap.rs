//! One-time engine bootstrap.

use crate::engine::Engine;
use crate::scheduler::TickScheduler;
use anyhow::{Context, Result};

/// Initialize the engine, then construct and start the single tick
/// scheduler.
///
/// Blocks on the engine's asynchronous `init` before anything else
/// touches the boundary; on failure the error propagates and no
/// scheduling or input forwarding ever happens. No retry, no partial
/// start.
pub fn bootstrap<E: Engine + ?Sized>(engine: &mut E) -> Result<TickScheduler> {
    tracing::info!("initializing engine");
    pollster::block_on(engine.init()).context("engine initialization failed")?;

    let mut scheduler = TickScheduler::new();
    scheduler.start(engine)?;
    Ok(scheduler)
}
