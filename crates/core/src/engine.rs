//! The engine boundary: the three entry points the simulation exposes,
//! plus the one-time initialization that must precede them.

use anyhow::Result;
use async_trait::async_trait;

/// The external simulation engine, opaque beyond these operations.
///
/// The driver never inspects engine state; it bootstraps the engine,
/// asks for the tick cadence once, forwards raw key codes, and invokes
/// one simulation step per interval. All four operations are called
/// from a single thread, so implementations need no interior locking.
#[async_trait]
pub trait Engine: Send {
    /// One-time asynchronous initialization. Must resolve successfully
    /// before any other method is called; failure aborts startup.
    async fn init(&mut self) -> Result<()>;

    /// Number of simulation steps the engine expects per second.
    ///
    /// Queried exactly once, at scheduler start; the value is treated
    /// as immutable for the process lifetime. Must be positive.
    fn tick_rate(&self) -> u32;

    /// Accept one raw key code. Fire-and-forget: no acknowledgement,
    /// no error surface. Codes arrive in platform delivery order.
    fn submit_keypress(&mut self, code: u8);

    /// Advance the simulation by exactly one tick.
    ///
    /// A failed step is fatal to the driver loop; the engine cannot be
    /// assumed intact afterwards.
    fn step(&mut self) -> Result<()>;
}

/// Legacy keyboard codes the snake engine consumes.
pub mod keycode {
    /// Left arrow.
    pub const ARROW_LEFT: u8 = 37;
    /// Up arrow.
    pub const ARROW_UP: u8 = 38;
    /// Right arrow.
    pub const ARROW_RIGHT: u8 = 39;
    /// Down arrow.
    pub const ARROW_DOWN: u8 = 40;
    /// Space bar (unpause).
    pub const SPACE: u8 = 32;
    /// R (reset game).
    pub const KEY_R: u8 = 82;
    /// W (toggle wall generation).
    pub const KEY_W: u8 = 87;
    /// M (toggle sound effects).
    pub const KEY_M: u8 = 77;
}
