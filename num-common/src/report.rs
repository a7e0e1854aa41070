//! Timestamped JSON result reports
//!
//! Each tool can export its last result as a small JSON document next to the
//! plots, so a run can be archived or diffed later.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Envelope around a tool-specific payload.
#[derive(Debug, Clone, Serialize)]
pub struct Report<T: Serialize> {
    /// Which tool produced the report
    pub tool: String,
    /// Local wall-clock time of the run
    pub created: String,
    /// Tool-specific result data
    pub result: T,
}

impl<T: Serialize> Report<T> {
    /// Wrap `result` with the tool name and the current local time.
    pub fn new(tool: &str, result: T) -> Self {
        Self {
            tool: tool.to_string(),
            created: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            result,
        }
    }

    /// Write the report as pretty-printed JSON to `<dir>/<stem>.json`.
    pub fn write_json(&self, dir: &Path, stem: &str) -> Result<PathBuf, String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize report: {e}"))?;
        let path = dir.join(format!("{stem}.json"));
        std::fs::write(&path, json)
            .map_err(|e| format!("Failed to write report {}: {e}", path.display()))?;
        Ok(path)
    }
}
