// src/types.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One grade-history entry: a single tool's assessment of a single file.
///
/// Entries are appended to `history.ndjson` by external assessment tooling
/// and are immutable once read. Unknown JSON fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeRecord {
    pub assessing_tool: String,
    pub file_path: String,
    pub grade: String,
    #[serde(default)]
    pub username: String,
    pub time_stamp: DateTime<Utc>,
    #[serde(default)]
    pub hash: String,
}

impl GradeRecord {
    /// Path with backslashes normalized to forward slashes.
    #[must_use]
    pub fn normalized_path(&self) -> String {
        self.file_path.replace('\\', "/")
    }

    /// True when both the tool name and the grade label are present.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.assessing_tool.is_empty() && !self.grade.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str) -> GradeRecord {
        GradeRecord {
            assessing_tool: "SOLID".into(),
            file_path: path.into(),
            grade: "A".into(),
            username: String::new(),
            time_stamp: "2024-01-01T00:00:00Z".parse().unwrap(),
            hash: String::new(),
        }
    }

    #[test]
    fn normalized_path_flips_backslashes() {
        assert_eq!(record("src\\a.go").normalized_path(), "src/a.go");
    }

    #[test]
    fn usable_requires_tool_and_grade() {
        let mut r = record("src/a.go");
        assert!(r.is_usable());
        r.grade = String::new();
        assert!(!r.is_usable());
        r.grade = "A".into();
        r.assessing_tool = String::new();
        assert!(!r.is_usable());
    }

    #[test]
    fn decodes_history_line_and_ignores_extras() {
        let line = r#"{"assessingTool":"OWASP-Top-10","filePath":"src/a.go","grade":"B+","username":"kim","timeStamp":"2024-03-01T10:00:00Z","codeReview":{},"gradingDetails":{"x":1},"hash":"abc"}"#;
        let r: GradeRecord = serde_json::from_str(line).unwrap();
        assert_eq!(r.assessing_tool, "OWASP-Top-10");
        assert_eq!(r.grade, "B+");
        assert_eq!(r.hash, "abc");
    }
}
