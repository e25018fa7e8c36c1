// src/tree.rs
//! The hierarchical report tree: one file node per assessed path, with
//! directory nodes mirroring the repository structure above it.

use crate::types::GradeRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// A file or directory entry in the report tree.
///
/// Coverage fields start empty and are filled in by aggregation. `None`
/// coverage means "nothing below this node scored" and stays distinct from
/// zero all the way out to rendering.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportNode {
    pub name: String,
    /// Full slash-normalized path from the report root.
    pub path: String,
    pub coverage: Option<f64>,
    pub tool_coverage: BTreeMap<String, f64>,
    #[serde(flatten)]
    pub kind: NodeKind,
}

/// File nodes hold records; directory nodes hold children. Never both.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NodeKind {
    File { records: Vec<GradeRecord> },
    Directory { children: Vec<ReportNode> },
}

impl ReportNode {
    fn file(name: &str, path: &str, records: Vec<GradeRecord>) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            coverage: None,
            tool_coverage: BTreeMap::new(),
            kind: NodeKind::File { records },
        }
    }

    fn directory(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            coverage: None,
            tool_coverage: BTreeMap::new(),
            kind: NodeKind::Directory {
                children: Vec::new(),
            },
        }
    }

    #[must_use]
    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// Child nodes for directories; empty for files.
    #[must_use]
    pub fn children(&self) -> &[ReportNode] {
        match &self.kind {
            NodeKind::Directory { children } => children,
            NodeKind::File { .. } => &[],
        }
    }
}

/// Groups deduplicated records by normalized path.
///
/// The `BTreeMap` visits paths in lexicographic order, which fixes the tree
/// registration order (and with it, the traversal order downstream).
#[must_use]
pub fn group_by_path(records: Vec<GradeRecord>) -> BTreeMap<String, Vec<GradeRecord>> {
    let mut grouped: BTreeMap<String, Vec<GradeRecord>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(record.normalized_path())
            .or_default()
            .push(record);
    }
    grouped
}

/// Builds the root forest from path-grouped records.
///
/// Each path contributes exactly one file node; shared ancestor directories
/// are created once and appended to their parent once. A path that splits
/// into zero segments is skipped.
#[must_use]
pub fn build_forest(grouped: BTreeMap<String, Vec<GradeRecord>>) -> Vec<ReportNode> {
    let mut roots = Vec::new();
    for (path, records) in grouped {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            continue;
        }
        insert(&mut roots, "", &segments, &path, records);
    }
    roots
}

fn insert(
    children: &mut Vec<ReportNode>,
    prefix: &str,
    segments: &[&str],
    full_path: &str,
    records: Vec<GradeRecord>,
) {
    let Some((name, rest)) = segments.split_first() else {
        return;
    };
    if rest.is_empty() {
        children.push(ReportNode::file(name, full_path, records));
        return;
    }

    let node_path = if prefix.is_empty() {
        (*name).to_string()
    } else {
        format!("{prefix}/{name}")
    };

    // Find-or-create by name keeps revisited ancestors unique.
    let slot = children
        .iter()
        .position(|c| c.is_directory() && c.name == *name)
        .unwrap_or_else(|| {
            children.push(ReportNode::directory(name, &node_path));
            children.len() - 1
        });
    if let NodeKind::Directory {
        children: grandchildren,
    } = &mut children[slot].kind
    {
        insert(grandchildren, &node_path, rest, full_path, records);
    }
}
