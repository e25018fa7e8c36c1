// tests/aggregation_scenarios.rs
//! Concrete numeric scenarios for the aggregation engine, exercised through
//! the public library surface.

use gradecov_core::aggregate::{self, GlobalStats, ReportSummary};
use gradecov_core::filter;
use gradecov_core::tree::{self, ReportNode};
use gradecov_core::types::GradeRecord;

// --- Helpers ---

fn record(path: &str, tool: &str, grade: &str, ts: &str) -> GradeRecord {
    GradeRecord {
        assessing_tool: tool.into(),
        file_path: path.into(),
        grade: grade.into(),
        username: String::new(),
        time_stamp: ts.parse().unwrap(),
        hash: String::new(),
    }
}

fn aggregate(records: Vec<GradeRecord>, threshold: &str) -> (Vec<ReportNode>, ReportSummary) {
    let records = filter::latest_records(records);
    let mut forest = tree::build_forest(tree::group_by_path(records));
    let mut stats = GlobalStats::new();
    aggregate::aggregate_forest(&mut forest, threshold, &mut stats);
    (forest, stats.finalize())
}

fn find<'a>(nodes: &'a [ReportNode], path: &str) -> &'a ReportNode {
    fn walk<'a>(nodes: &'a [ReportNode], path: &str) -> Option<&'a ReportNode> {
        for node in nodes {
            if node.path == path {
                return Some(node);
            }
            if let Some(found) = walk(node.children(), path) {
                return Some(found);
            }
        }
        None
    }
    walk(nodes, path).unwrap_or_else(|| panic!("no node at {path}"))
}

const TS: &str = "2024-03-01T10:00:00Z";

// --- Scenarios ---

#[test]
fn two_tool_file_averages_its_scores() {
    // Against threshold B: A exceeds (120), B- is one rank short (90).
    let (forest, _) = aggregate(
        vec![
            record("src/a.go", "SOLID", "A", TS),
            record("src/a.go", "OWASP-Top-10", "B-", TS),
        ],
        "B",
    );
    assert_eq!(find(&forest, "src/a.go").coverage, Some(105.0));
}

#[test]
fn sibling_without_usable_records_is_excluded_from_the_directory_mean() {
    let (forest, _) = aggregate(
        vec![
            record("src/a.go", "SOLID", "A", TS),
            record("src/a.go", "OWASP-Top-10", "B-", TS),
            record("src/b.go", "", "", TS),
        ],
        "B",
    );
    assert_eq!(find(&forest, "src/b.go").coverage, None);
    assert_eq!(find(&forest, "src").coverage, Some(105.0));
}

#[test]
fn per_tool_overall_average_over_three_files() {
    let (_, summary) = aggregate(
        vec![
            record("a.go", "SOLID", "B", TS),
            record("b.go", "SOLID", "B", TS),
            record("c.go", "SOLID", "C-", TS),
        ],
        "B",
    );
    let average = summary.tool_averages["SOLID"];
    assert!((average - 83.33).abs() < 0.01);
}

#[test]
fn dedup_then_aggregate_sees_one_record_per_tool() {
    let (forest, summary) = aggregate(
        vec![
            record("src/a.go", "SOLID", "F", "2024-01-01T00:00:00Z"),
            record("src/a.go", "SOLID", "A", "2024-02-01T00:00:00Z"),
            record("src/a.go", "SOLID", "B", "2024-03-01T00:00:00Z"),
        ],
        "B",
    );
    let file = find(&forest, "src/a.go");
    assert_eq!(file.tool_coverage.len(), 1);
    assert_eq!(file.coverage, Some(100.0));
    assert_eq!(summary.total_average, Some(100.0));
}

#[test]
fn deep_nesting_averages_level_by_level() {
    // d1/d2/a.go -> 100, d1/b.go -> 70.
    // d2 averages 100; d1 averages (100 + 70) / 2 = 85 over its two
    // children (the d2 directory and the b.go file).
    let (forest, summary) = aggregate(
        vec![
            record("d1/d2/a.go", "SOLID", "B", TS),
            record("d1/b.go", "SOLID", "C", TS),
        ],
        "B",
    );
    assert_eq!(find(&forest, "d1/d2").coverage, Some(100.0));
    assert_eq!(find(&forest, "d1").coverage, Some(85.0));
    // The report-wide number averages files, not directories.
    assert_eq!(summary.total_average, Some(85.0));
}

#[test]
fn unrecognized_grades_fail_closed_instead_of_erroring() {
    let (forest, _) = aggregate(vec![record("a.go", "SOLID", "excellent", TS)], "B");
    // Rank 0 is eight ranks below B, deep in the floor tier.
    assert_eq!(find(&forest, "a.go").coverage, Some(10.0));
}

#[test]
fn directory_tool_map_omits_tools_no_child_defines() {
    let (forest, _) = aggregate(
        vec![
            record("src/a.go", "SOLID", "B", TS),
            record("lib/b.go", "Clean-Code", "B", TS),
        ],
        "B",
    );
    let src = find(&forest, "src");
    assert!(src.tool_coverage.contains_key("SOLID"));
    assert!(!src.tool_coverage.contains_key("Clean-Code"));
}
