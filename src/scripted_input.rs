use anyhow::Result;
use serde::Deserialize;
use snakehost_core::KeySource;
use std::{collections::VecDeque, fs, path::Path, time::Instant};

#[derive(Debug, Deserialize)]
struct KeyScriptFile {
    events: Vec<KeyScriptEventDef>,
}

#[derive(Debug, Clone, Deserialize)]
struct KeyScriptEventDef {
    at_ms: u64,
    code: u8,
}

/// Timed key-event script for headless runs.
///
/// Scripts are a list of `{at_ms, code}` events, delivered in file
/// order once their offset from script start has elapsed.
#[derive(Debug)]
pub struct ScriptedKeys {
    pending: VecDeque<KeyScriptEventDef>,
    started: Instant,
}

impl ScriptedKeys {
    /// Load a key script from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Load a key script from an in-memory JSON string.
    pub fn from_str(contents: &str) -> Result<Self> {
        let file: KeyScriptFile = serde_json::from_str(contents)?;
        if file.events.is_empty() {
            anyhow::bail!("key script contains no events");
        }

        let mut last_at: Option<u64> = None;
        for event in &file.events {
            if let Some(prev) = last_at {
                if event.at_ms < prev {
                    anyhow::bail!("key script events must be sorted by at_ms");
                }
            }
            last_at = Some(event.at_ms);
        }

        Ok(Self {
            pending: file.events.into(),
            started: Instant::now(),
        })
    }

    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }
}

impl KeySource for ScriptedKeys {
    fn poll_key(&mut self) -> Option<u8> {
        let elapsed_ms = self.started.elapsed().as_millis() as u64;
        let due = self
            .pending
            .front()
            .is_some_and(|event| event.at_ms <= elapsed_ms);
        if due {
            self.pending.pop_front().map(|event| event.code)
        } else {
            None
        }
    }
}
