use crate::scripted_input::ScriptedKeys;
use anyhow::Result;
use snakehost_core::{bootstrap, run_paced, Engine, NullSource};
use std::path::PathBuf;

pub struct HeadlessConfig {
    pub scripted_input: Option<PathBuf>,
    pub max_ticks: Option<u64>,
}

/// Run the driver without a window: scripted (or no) key events, same
/// bootstrap-then-pace protocol as the windowed mode.
pub fn run<E: Engine>(mut engine: E, cfg: HeadlessConfig) -> Result<()> {
    // Load the script before touching the engine so a bad file fails
    // fast, ahead of any initialization side effects.
    let script = match cfg.scripted_input.as_deref() {
        Some(path) => Some(ScriptedKeys::from_path(path)?),
        None => None,
    };

    let mut scheduler = bootstrap(&mut engine)?;

    let result = match script {
        Some(mut keys) => run_paced(&mut engine, &mut scheduler, &mut keys, cfg.max_ticks),
        None => run_paced(&mut engine, &mut scheduler, &mut NullSource, cfg.max_ticks),
    };

    if let Err(err) = &result {
        tracing::error!(%err, "headless run aborted");
    }
    result
}
