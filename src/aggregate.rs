// src/aggregate.rs
//! Bottom-up coverage aggregation over the report tree.
//!
//! One traversal computes every node's overall and per-tool coverage and
//! feeds a single [`GlobalStats`] accumulator, which then finalizes into the
//! report-wide averages. The accumulator is threaded through explicitly so
//! aggregation stays a pure function of (tree, threshold).

use crate::grade;
use crate::tree::{NodeKind, ReportNode};
use crate::types::GradeRecord;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Report-wide accumulator for one aggregation run.
///
/// Each (file, tool) pair contributes to the tool sums at most once, and
/// each file path contributes to the total sum at most once.
#[derive(Debug, Default)]
pub struct GlobalStats {
    tools: BTreeSet<String>,
    tool_sums: BTreeMap<String, f64>,
    tool_counts: BTreeMap<String, usize>,
    total_sum: f64,
    counted_paths: HashSet<String>,
}

/// Final report-wide numbers. The only place they are derived.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Sorted distinct tool names observed during aggregation.
    pub tools: Vec<String>,
    /// Overall average per tool. A tool with no counted files is absent,
    /// not zero.
    pub tool_averages: BTreeMap<String, f64>,
    /// Average of per-file average coverage; `None` when nothing scored.
    pub total_average: Option<f64>,
}

impl GlobalStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the per-tool and total averages.
    ///
    /// Zero counts are guarded explicitly so a degenerate run yields
    /// `None`/absent entries instead of NaN.
    #[must_use]
    pub fn finalize(&self) -> ReportSummary {
        let mut tool_averages = BTreeMap::new();
        for tool in &self.tools {
            let count = self.tool_counts.get(tool).copied().unwrap_or(0);
            if count > 0 {
                let sum = self.tool_sums.get(tool).copied().unwrap_or(0.0);
                tool_averages.insert(tool.clone(), sum / count as f64);
            }
        }

        let total_average = if self.counted_paths.is_empty() {
            None
        } else {
            Some(self.total_sum / self.counted_paths.len() as f64)
        };

        ReportSummary {
            tools: self.tools.iter().cloned().collect(),
            tool_averages,
            total_average,
        }
    }
}

/// Computes coverage for every node in the forest, post-order, feeding
/// `stats`. Children are visited in registration order so the floating-point
/// sums are reproducible bit for bit.
pub fn aggregate_forest(forest: &mut [ReportNode], threshold: &str, stats: &mut GlobalStats) {
    for node in forest.iter_mut() {
        aggregate_node(node, threshold, stats);
    }
}

fn aggregate_node(node: &mut ReportNode, threshold: &str, stats: &mut GlobalStats) {
    if let NodeKind::Directory { children } = &mut node.kind {
        for child in children.iter_mut() {
            aggregate_node(child, threshold, stats);
        }
    }

    let (coverage, tool_coverage) = match &node.kind {
        NodeKind::File { records } => score_file(records, &node.path, threshold, stats),
        NodeKind::Directory { children } => average_children(children),
    };
    node.coverage = coverage;
    node.tool_coverage = tool_coverage;
}

/// Scores a file node's records against the threshold.
///
/// Records are one-per-tool after deduplication, but only the first record
/// per tool counts regardless. Records missing a tool or grade are skipped;
/// a file with none of either stays at `None`.
fn score_file(
    records: &[GradeRecord],
    path: &str,
    threshold: &str,
    stats: &mut GlobalStats,
) -> (Option<f64>, BTreeMap<String, f64>) {
    let mut tool_coverage: BTreeMap<String, f64> = BTreeMap::new();
    for record in records {
        if !record.is_usable() || tool_coverage.contains_key(&record.assessing_tool) {
            continue;
        }
        let score = grade::coverage_score(&record.grade, threshold);
        tool_coverage.insert(record.assessing_tool.clone(), score);
        stats.tools.insert(record.assessing_tool.clone());
        *stats
            .tool_sums
            .entry(record.assessing_tool.clone())
            .or_insert(0.0) += score;
        *stats
            .tool_counts
            .entry(record.assessing_tool.clone())
            .or_insert(0) += 1;
    }

    if tool_coverage.is_empty() {
        return (None, tool_coverage);
    }
    let mean = tool_coverage.values().sum::<f64>() / tool_coverage.len() as f64;
    if stats.counted_paths.insert(path.to_string()) {
        stats.total_sum += mean;
    }
    (Some(mean), tool_coverage)
}

/// Averages a directory's children, excluding undefined coverage from both
/// sum and count. A tool absent from every child is absent here too.
fn average_children(children: &[ReportNode]) -> (Option<f64>, BTreeMap<String, f64>) {
    let mut sum = 0.0;
    let mut defined = 0usize;
    let mut per_tool: BTreeMap<String, (f64, usize)> = BTreeMap::new();

    for child in children {
        if let Some(value) = child.coverage {
            sum += value;
            defined += 1;
        }
        for (tool, value) in &child.tool_coverage {
            let entry = per_tool.entry(tool.clone()).or_insert((0.0, 0));
            entry.0 += *value;
            entry.1 += 1;
        }
    }

    let coverage = (defined > 0).then(|| sum / defined as f64);
    let tool_coverage = per_tool
        .into_iter()
        .map(|(tool, (total, count))| (tool, total / count as f64))
        .collect();
    (coverage, tool_coverage)
}
