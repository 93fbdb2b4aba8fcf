//! JSON output for the `--json` flag.
//!
//! Re-serializes whatever a loader produced, pretty-printed, so the reader
//! can be piped into `jq` and friends. This subsystem has no write path; the
//! JSON goes to stdout like every other view.

use serde::Serialize;
use std::error::Error;

/// Pretty-print a loaded payload as JSON.
pub fn render<T: Serialize>(value: &T) -> Result<String, Box<dyn Error>> {
    Ok(serde_json::to_string_pretty(value)?)
}
