//! JSON event files read by the CLI.
//!
//! A local convenience format: one run header and its events. This is
//! an input format owned by this binary, not a detector data format.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use rustpfo_core::{Event, RunHeader};

/// One run's worth of events, as stored on disk.
#[derive(Debug, Serialize, Deserialize)]
pub struct EventFile {
    /// Header of the run the events belong to.
    pub run_header: RunHeader,
    /// Events, in processing order.
    pub events: Vec<Event>,
}

impl EventFile {
    /// Reads and parses an event file from disk.
    pub fn from_path(path: &Path) -> crate::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
