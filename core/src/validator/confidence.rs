use serde::{Deserialize, Serialize};

use super::ValidationIssue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Confidence points deducted per finding of this severity.
    pub fn weight(self) -> u8 {
        match self {
            Severity::Critical => 30,
            Severity::High => 15,
            Severity::Medium => 5,
            Severity::Low => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

/// Start from full confidence and subtract the weight of every finding.
/// The result is clamped to 0..=100; enough findings floor it, they never
/// wrap it.
pub fn score_confidence(issues: &[ValidationIssue]) -> u8 {
    let deduction: i64 = issues
        .iter()
        .map(|issue| i64::from(issue.severity.weight()))
        .sum();
    (100 - deduction).clamp(0, 100) as u8
}
