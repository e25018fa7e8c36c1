// src/filter.rs
//! Record filtering: latest-grade deduplication, tool selection, and
//! config-driven ignore rules. All pure functions over the record list.

use crate::config::{IgnoreRules, IgnoredFile};
use crate::types::GradeRecord;
use std::collections::HashMap;

/// Collapses the history to one record per (path, tool): the latest one.
///
/// Equal timestamps resolve to the record seen last in the scan. Output
/// preserves first-encounter order, so repeated runs over the same log are
/// deterministic.
#[must_use]
pub fn latest_records(records: Vec<GradeRecord>) -> Vec<GradeRecord> {
    let mut kept: Vec<GradeRecord> = Vec::new();
    let mut slots: HashMap<(String, String), usize> = HashMap::new();

    for record in records {
        let key = (record.normalized_path(), record.assessing_tool.clone());
        match slots.get(&key) {
            Some(&slot) => {
                if record.time_stamp >= kept[slot].time_stamp {
                    kept[slot] = record;
                }
            }
            None => {
                slots.insert(key, kept.len());
                kept.push(record);
            }
        }
    }
    kept
}

/// Keeps records for the requested tools, matched case-insensitively.
///
/// Requested names are trimmed of surrounding whitespace first. Output is
/// grouped by requested-tool order.
#[must_use]
pub fn filter_tools(tools: &[String], records: &[GradeRecord]) -> Vec<GradeRecord> {
    let mut filtered = Vec::new();
    for tool in tools {
        let wanted = tool.trim().to_uppercase();
        filtered.extend(
            records
                .iter()
                .filter(|r| r.assessing_tool.to_uppercase() == wanted)
                .cloned(),
        );
    }
    filtered
}

/// Drops records whose path matches any configured ignore rule.
#[must_use]
pub fn filter_ignored(rules: &IgnoreRules, records: Vec<GradeRecord>) -> Vec<GradeRecord> {
    records
        .into_iter()
        .filter(|r| !is_ignored(rules, &r.normalized_path()))
        .collect()
}

fn is_ignored(rules: &IgnoreRules, path: &str) -> bool {
    matches_file_rule(&rules.files, path) || matches_folder_rule(&rules.folders, path)
}

/// A file rule matches on exact path equality with `path/name`.
fn matches_file_rule(files: &[IgnoredFile], path: &str) -> bool {
    files.iter().any(|file| {
        let full = if file.path.is_empty() {
            file.name.clone()
        } else {
            format!("{}/{}", file.path.trim_end_matches('/'), file.name)
        };
        full.replace('\\', "/") == path
    })
}

/// A folder rule matches when any non-terminal segment equals the folder
/// name. The terminal segment is the file itself and is never compared.
fn matches_folder_rule(folders: &[String], path: &str) -> bool {
    let segments: Vec<&str> = path.split('/').collect();
    if segments.len() < 2 {
        return false;
    }
    segments[..segments.len() - 1]
        .iter()
        .any(|segment| folders.iter().any(|folder| folder == segment))
}
