pub mod confidence;

use serde::{Deserialize, Serialize};

use crate::inputs::{DocumentReference, ReferenceRole};
use self::confidence::{score_confidence, Severity};

/// Hard ceiling on derived cross-references. Issue reporting is never
/// capped; only the derived relation list is.
pub const MAX_CROSS_REFERENCES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Inconsistency,
    MissingReference,
    HashMismatch,
    VersionConflict,
}

impl IssueKind {
    pub fn label(self) -> &'static str {
        match self {
            IssueKind::Inconsistency => "inconsistency",
            IssueKind::MissingReference => "missing_reference",
            IssueKind::HashMismatch => "hash_mismatch",
            IssueKind::VersionConflict => "version_conflict",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub kind: IssueKind,
    pub severity: Severity,
    pub description: String,
    pub remediation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub confidence: u8,
    pub issues: Vec<ValidationIssue>,
    pub cross_references: Vec<DocumentReference>,
}

/// A reference set is acceptable as long as nothing high or critical was
/// found. Medium and low findings lower confidence but do not block.
pub fn overall_validity(issues: &[ValidationIssue]) -> bool {
    !issues
        .iter()
        .any(|issue| matches!(issue.severity, Severity::Critical | Severity::High))
}

/// Walk the reference graph and report findings in rule order. The rules
/// are independent: a reference can trip more than one, and every finding
/// is reported, never just the first.
pub fn validate_references(references: &[DocumentReference]) -> ValidationResult {
    let mut issues: Vec<ValidationIssue> = Vec::new();

    // Rule 1: source documents with nothing produced from them.
    let source_count = references
        .iter()
        .filter(|r| r.role == ReferenceRole::Source)
        .count();
    let output_count = references
        .iter()
        .filter(|r| r.role == ReferenceRole::Output)
        .count();
    if source_count > 0 && output_count == 0 {
        issues.push(ValidationIssue {
            kind: IssueKind::MissingReference,
            severity: Severity::Medium,
            description: "source documents provided but no outputs generated".to_string(),
            remediation: "attach at least one generated output before assembling a badge"
                .to_string(),
        });
    }

    // Rule 2: digests too short to identify anything. Length is counted
    // in characters, not bytes.
    for reference in references {
        if reference.content_digest.chars().count() < 8 {
            issues.push(ValidationIssue {
                kind: IssueKind::HashMismatch,
                severity: Severity::High,
                description: format!(
                    "reference '{}' carries a missing or truncated content digest",
                    reference.name
                ),
                remediation: format!(
                    "recompute the content digest for reference {}",
                    reference.reference_id
                ),
            });
        }
    }

    // Rule 3: derive a cross-reference for every ordered pair of distinct
    // references sharing a non-empty relationship label.
    let mut cross_references: Vec<DocumentReference> = Vec::new();
    'pairs: for (i, first) in references.iter().enumerate() {
        if first.relationship.is_empty() {
            continue;
        }
        for (j, second) in references.iter().enumerate() {
            if i == j || second.relationship != first.relationship {
                continue;
            }
            let mut derived = second.clone();
            derived.role = ReferenceRole::Dependency;
            derived.relationship = format!("Related to {}", first.name);
            cross_references.push(derived);
            if cross_references.len() >= MAX_CROSS_REFERENCES {
                break 'pairs;
            }
        }
    }

    let confidence = score_confidence(&issues);
    let valid = overall_validity(&issues);

    ValidationResult {
        valid,
        confidence,
        issues,
        cross_references,
    }
}
