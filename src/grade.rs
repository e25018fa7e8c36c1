// src/grade.rs
//! The canonical grade scale and the grade-to-coverage step function.
//!
//! This is the only grade table and the only breakpoint set in the crate;
//! every caller (tree aggregation, assessments, rendering) goes through it.

use log::warn;

/// Grade labels and their ordinal ranks, highest first. "A*" and "A" share
/// a rank; "F" is the floor.
const GRADE_RANKS: &[(&str, u32)] = &[
    ("A+", 12),
    ("A*", 11),
    ("A", 11),
    ("A-", 10),
    ("B+", 9),
    ("B", 8),
    ("B-", 7),
    ("C+", 6),
    ("C", 5),
    ("C-", 4),
    ("D+", 3),
    ("D", 2),
    ("D-", 1),
    ("F", 0),
];

/// Every value `coverage_score` can produce.
pub const COVERAGE_STEPS: &[f64] = &[120.0, 100.0, 90.0, 80.0, 70.0, 50.0, 30.0, 10.0];

/// Ordinal rank of a grade label on the canonical scale.
///
/// Labels are trimmed of whitespace and surrounding quotes and matched
/// case-insensitively. Unrecognized labels rank 0 (failing) and are logged,
/// never an error.
#[must_use]
pub fn rank(label: &str) -> u32 {
    let cleaned = label
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .to_uppercase();
    match GRADE_RANKS.iter().find(|(name, _)| *name == cleaned) {
        Some((_, value)) => *value,
        None => {
            warn!("unrecognized grade '{label}', treating as F (rank 0)");
            0
        }
    }
}

/// Coverage percentage for a grade relative to the threshold grade.
///
/// A non-increasing step function of the rank deficit: exceeding the
/// threshold scores 120, meeting it 100, and each rank short steps down
/// through 90/80/70/50/30 to a floor of 10.
#[must_use]
pub fn coverage_score(grade: &str, threshold: &str) -> f64 {
    let deficit = i64::from(rank(threshold)) - i64::from(rank(grade));
    match deficit {
        d if d < 0 => 120.0,
        0 => 100.0,
        1 => 90.0,
        2 => 80.0,
        3 => 70.0,
        4 => 50.0,
        5 => 30.0,
        _ => 10.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_follow_the_scale_order() {
        assert_eq!(rank("A+"), 12);
        assert_eq!(rank("A*"), 11);
        assert_eq!(rank("A"), 11);
        assert_eq!(rank("B"), 8);
        assert_eq!(rank("D-"), 1);
        assert_eq!(rank("F"), 0);
    }

    #[test]
    fn rank_is_case_insensitive_and_strips_quotes() {
        assert_eq!(rank("b+"), 9);
        assert_eq!(rank("\"A-\""), 10);
        assert_eq!(rank("'c'"), 5);
        assert_eq!(rank("  B  "), 8);
    }

    #[test]
    fn unknown_labels_rank_zero() {
        assert_eq!(rank("Z"), 0);
        assert_eq!(rank(""), 0);
        assert_eq!(rank("not a grade"), 0);
    }

    #[test]
    fn exceeding_the_threshold_scores_120() {
        assert_eq!(coverage_score("A", "B"), 120.0);
        assert_eq!(coverage_score("A+", "A*"), 120.0);
    }

    #[test]
    fn meeting_the_threshold_scores_100() {
        assert_eq!(coverage_score("B", "B"), 100.0);
        // A* and A share a rank, so either direction is a meet.
        assert_eq!(coverage_score("A", "A*"), 100.0);
    }

    #[test]
    fn each_rank_short_steps_down() {
        assert_eq!(coverage_score("B-", "B"), 90.0);
        assert_eq!(coverage_score("C+", "B"), 80.0);
        assert_eq!(coverage_score("C", "B"), 70.0);
        assert_eq!(coverage_score("C-", "B"), 50.0);
        assert_eq!(coverage_score("D+", "B"), 30.0);
        assert_eq!(coverage_score("D", "B"), 10.0);
        assert_eq!(coverage_score("F", "B"), 10.0);
    }

    #[test]
    fn score_is_total_and_lands_on_a_step() {
        let labels = ["A+", "A*", "A", "B-", "C", "D+", "F", "??", "", "'a'"];
        for g in labels {
            for t in labels {
                let score = coverage_score(g, t);
                assert!(
                    COVERAGE_STEPS.contains(&score),
                    "score({g}, {t}) = {score} not on a step"
                );
            }
        }
    }

    #[test]
    fn score_is_non_increasing_in_the_deficit() {
        // Walk a fixed threshold down the whole scale.
        let grades = [
            "A+", "A", "A-", "B+", "B", "B-", "C+", "C", "C-", "D+", "D", "D-", "F",
        ];
        let mut last = f64::INFINITY;
        for g in grades {
            let score = coverage_score(g, "B");
            assert!(score <= last, "score rose at {g}");
            last = score;
        }
    }
}
