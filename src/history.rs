// src/history.rs
use crate::error::{GradecovError, Result};
use crate::types::GradeRecord;
use std::fs;
use std::path::Path;

/// The append-only grade log inside the data directory.
pub const HISTORY_FILE: &str = "history.ndjson";

/// Reads and decodes `history.ndjson` from the data directory.
///
/// One JSON object per line. Blank lines are skipped; a malformed line fails
/// the whole read with its line number so the log can be repaired.
///
/// # Errors
/// Returns an error when the file is missing, unreadable, or malformed.
pub fn read_history(data_dir: &Path) -> Result<Vec<GradeRecord>> {
    let path = data_dir.join(HISTORY_FILE);
    if !path.is_file() {
        return Err(GradecovError::HistoryNotFound(path));
    }

    let raw = fs::read_to_string(&path).map_err(|e| GradecovError::io(e, &path))?;
    let mut records = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record: GradeRecord =
            serde_json::from_str(line).map_err(|source| GradecovError::HistoryDecode {
                path: path.clone(),
                line: idx + 1,
                source,
            })?;
        records.push(record);
    }
    Ok(records)
}
