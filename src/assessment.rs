// src/assessment.rs
//! Threshold gates over the deduplicated history: one against the grade
//! scale, one against average coverage.

use crate::grade;
use crate::types::GradeRecord;
use colored::Colorize;

/// One record that fell below the assessed threshold.
#[derive(Debug, Clone)]
pub struct Violation {
    pub file_path: String,
    pub tool: String,
    pub grade: String,
    pub coverage: f64,
}

/// Outcome of a single assessment run.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub passed: bool,
    /// Mean coverage over the assessed records, when the assessment
    /// computed one.
    pub average: Option<f64>,
    pub violations: Vec<Violation>,
}

fn violation(record: &GradeRecord, threshold_grade: &str) -> Violation {
    Violation {
        file_path: record.normalized_path(),
        tool: record.assessing_tool.clone(),
        grade: record.grade.clone(),
        coverage: grade::coverage_score(&record.grade, threshold_grade),
    }
}

/// Passes when no record grades below the threshold grade.
///
/// Records missing a tool or grade are skipped rather than failed.
#[must_use]
pub fn assess_grades(records: &[GradeRecord], threshold_grade: &str) -> Outcome {
    let threshold_rank = grade::rank(threshold_grade);
    let violations: Vec<Violation> = records
        .iter()
        .filter(|r| r.is_usable() && grade::rank(&r.grade) < threshold_rank)
        .map(|r| violation(r, threshold_grade))
        .collect();
    Outcome {
        passed: violations.is_empty(),
        average: None,
        violations,
    }
}

/// Passes when the mean coverage score is at least `threshold_percent`.
///
/// Every record is scored against the threshold grade first. Zero records
/// fail: an empty run must not read as full coverage.
#[must_use]
pub fn assess_coverage(
    records: &[GradeRecord],
    threshold_grade: &str,
    threshold_percent: u32,
) -> Outcome {
    if records.is_empty() {
        return Outcome {
            passed: false,
            average: None,
            violations: Vec::new(),
        };
    }

    let mut total = 0.0;
    let mut violations = Vec::new();
    for record in records {
        let score = grade::coverage_score(&record.grade, threshold_grade);
        total += score;
        if score < f64::from(threshold_percent) {
            violations.push(violation(record, threshold_grade));
        }
    }

    let average = total / records.len() as f64;
    Outcome {
        passed: average >= f64::from(threshold_percent),
        average: Some(average),
        violations,
    }
}

/// Prints an outcome to stderr: violations when failing, then the average.
pub fn print_outcome(label: &str, outcome: &Outcome) {
    if !outcome.passed {
        for v in &outcome.violations {
            eprintln!(
                "{} {} [{}] graded {} (coverage {:.0}%)",
                "violation:".red().bold(),
                v.file_path,
                v.tool,
                v.grade.yellow(),
                v.coverage
            );
        }
    }
    if let Some(average) = outcome.average {
        eprintln!("{} {average:.2}%", "average coverage:".bold());
    }
    if outcome.passed {
        eprintln!("{} {label} assessment passed", "ok:".green().bold());
    } else {
        eprintln!("{} {label} assessment failed", "error:".red().bold());
    }
}
