#![warn(missing_docs)]
//! Test instrumentation for the driver: a recording engine that
//! timestamps every boundary call, a queued key source, and a JSONL
//! sink for call-log artifacts.

mod recording;

pub use recording::*;

use anyhow::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write a recorded call log as newline-delimited JSON.
pub fn write_jsonl<P: AsRef<Path>>(path: P, calls: &[Call]) -> Result<()> {
    let mut file = File::create(path)?;
    for call in calls {
        let line = serde_json::to_string(call)?;
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;
    }
    Ok(())
}
