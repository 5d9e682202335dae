#![warn(missing_docs)]
//! Driver contract for a tick-based snake engine: the engine boundary
//! trait, the self-rescheduling tick scheduler, bootstrap, and ordered
//! key forwarding. Platform wiring (window, CLI, config) lives in the
//! `snakehost` binary.

pub mod bootstrap;
pub mod driver;
pub mod engine;
pub mod input;
pub mod scheduler;

pub use bootstrap::bootstrap;
pub use driver::run_paced;
pub use engine::Engine;
pub use input::{forward_pending, KeySource, NullSource};
pub use scheduler::TickScheduler;
