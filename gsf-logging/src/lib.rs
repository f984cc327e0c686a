//! gsf-logging: append-only NDJSON events for run post-mortems.
//!
//! One JSON object per line, flushed on demand; a crashed run leaves at
//! worst one partial trailing line, which lenient readers drop.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One entity's reversal attempt.
#[derive(Debug, Clone, Serialize)]
pub struct EntityReversalEventV1 {
    pub event: &'static str,
    pub ts_ms: u64,
    pub entity_index: usize,
    pub entity_seed_candidates: u64,
    pub gen_seed_candidates: u64,
    pub validator_calls: u64,
    pub elapsed_ms: u64,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Serialize)]
pub struct RunResultEventV1 {
    pub event: &'static str,
    pub ts_ms: u64,
    pub cohort_size: usize,
    pub max_rolls: u8,
    pub modes: String,
    pub group_seed: Option<u64>,
    pub first_index: Option<usize>,
    pub elapsed_ms: u64,
}

#[derive(Debug, Error)]
pub enum NdjsonError {
    #[error("log I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("log serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Append-only NDJSON writer.
///
/// Contract: each call writes exactly one JSON object followed by a
/// newline.
pub struct NdjsonWriter {
    w: BufWriter<File>,
}

impl NdjsonWriter {
    /// Open a file for append. Creates it if it doesn't exist.
    pub fn open_append(path: impl AsRef<Path>) -> Result<Self, NdjsonError> {
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            w: BufWriter::new(f),
        })
    }

    pub fn write_event<T: Serialize>(&mut self, event: &T) -> Result<(), NdjsonError> {
        let mut buf = serde_json::to_vec(event)?;
        buf.push(b'\n');
        self.w.write_all(&buf)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), NdjsonError> {
        self.w.flush()?;
        Ok(())
    }
}

/// Milliseconds since the Unix epoch, for event timestamps.
pub fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
