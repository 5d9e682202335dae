//! Cooperative paced loop for headless runs.

use crate::engine::Engine;
use crate::input::{forward_pending, KeySource};
use crate::scheduler::TickScheduler;
use anyhow::Result;

/// Drive the engine at the scheduler's cadence until `max_ticks` steps
/// have run (forever when `None`).
///
/// Each iteration drains pending keys, then steps, then sleeps until
/// the completion-anchored deadline. Keys and steps interleave on this
/// one thread, so a key that arrives between two steps is forwarded
/// before the next step runs. `max_ticks` is checked before each
/// re-schedule; the in-scope contract has no other stop signal.
pub fn run_paced<E, S>(
    engine: &mut E,
    scheduler: &mut TickScheduler,
    keys: &mut S,
    max_ticks: Option<u64>,
) -> Result<()>
where
    E: Engine + ?Sized,
    S: KeySource + ?Sized,
{
    let mut ticks = 0u64;
    loop {
        if let Some(limit) = max_ticks {
            if ticks >= limit {
                tracing::info!(ticks, "tick limit reached");
                return Ok(());
            }
        }

        forward_pending(keys, engine);
        scheduler.run_step(engine)?;
        ticks += 1;

        scheduler.sleep_until_deadline();
    }
}
