//! Ordered key forwarding.
//!
//! The driver buffers nothing itself: every code a source delivers is
//! handed to the engine exactly once, in delivery order. Auto-repeat
//! events are forwarded as-is; there is no filtering or coalescing.

use crate::engine::Engine;

/// A source of raw key codes, polled in delivery order.
///
/// Implemented by the scripted key player in the binary and by queued
/// sources in the testkit. Returning `None` means no event is pending
/// right now; the source may yield more later.
pub trait KeySource {
    /// Next pending key code, if one is due.
    fn poll_key(&mut self) -> Option<u8>;
}

/// A source that never yields a key.
#[derive(Debug, Default)]
pub struct NullSource;

impl KeySource for NullSource {
    fn poll_key(&mut self) -> Option<u8> {
        None
    }
}

/// Drain every pending key from `keys` into the engine's keypress
/// sink, preserving order. Returns the number of codes forwarded.
pub fn forward_pending<S, E>(keys: &mut S, engine: &mut E) -> usize
where
    S: KeySource + ?Sized,
    E: Engine + ?Sized,
{
    let mut forwarded = 0;
    while let Some(code) = keys.poll_key() {
        engine.submit_keypress(code);
        forwarded += 1;
    }
    forwarded
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use std::collections::VecDeque;

    struct SinkEngine {
        codes: Vec<u8>,
    }

    #[async_trait]
    impl Engine for SinkEngine {
        async fn init(&mut self) -> Result<()> {
            Ok(())
        }

        fn tick_rate(&self) -> u32 {
            1
        }

        fn submit_keypress(&mut self, code: u8) {
            self.codes.push(code);
        }

        fn step(&mut self) -> Result<()> {
            Ok(())
        }
    }

    struct Queued(VecDeque<u8>);

    impl KeySource for Queued {
        fn poll_key(&mut self) -> Option<u8> {
            self.0.pop_front()
        }
    }

    #[test]
    fn drains_in_delivery_order() {
        let mut keys = Queued(VecDeque::from([37, 38, 39]));
        let mut engine = SinkEngine { codes: Vec::new() };

        let forwarded = forward_pending(&mut keys, &mut engine);

        assert_eq!(forwarded, 3);
        assert_eq!(engine.codes, vec![37, 38, 39]);
    }

    #[test]
    fn null_source_forwards_nothing() {
        let mut engine = SinkEngine { codes: Vec::new() };
        assert_eq!(forward_pending(&mut NullSource, &mut engine), 0);
        assert!(engine.codes.is_empty());
    }
}
