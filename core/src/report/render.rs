use crate::badge::schemas::Badge;
use crate::error::CoreResult;
use crate::validator::ValidationIssue;
use crate::verifier::VerificationReport;

pub fn render_issues_csv(issues: &[ValidationIssue]) -> CoreResult<String> {
    let mut wtr = csv::WriterBuilder::new().from_writer(vec![]);
    wtr.write_record(&["kind", "severity", "description", "remediation"])?;
    for issue in issues {
        wtr.write_record(&[
            issue.kind.label(),
            issue.severity.label(),
            issue.description.as_str(),
            issue.remediation.as_str(),
        ])?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).replace("\r\n", "\n"))
}

pub fn render_issues_markdown(issues: &[ValidationIssue]) -> String {
    let mut out = Vec::new();
    out.push("# Validation Findings".to_string());
    out.push("".to_string());
    if issues.is_empty() {
        out.push("- [x] No findings against the reference graph.".to_string());
        out.push("".to_string());
        return out.join("\n");
    }
    out.push("| Kind | Severity | Description | Remediation |".to_string());
    out.push("|---|---|---|---|".to_string());
    for issue in issues {
        out.push(format!(
            "| {} | {} | {} | {} |",
            issue.kind.label(),
            issue.severity.label(),
            issue.description,
            issue.remediation
        ));
    }
    out.push("".to_string());
    out.join("\n")
}

/// Human-facing badge card. The JSON form of the badge is the record; this
/// is what gets pasted into review threads.
pub fn render_badge_markdown(badge: &Badge) -> String {
    let mut out = Vec::new();
    out.push("# Compliance Badge".to_string());
    out.push("".to_string());
    out.push(format!("- Badge ID: `{}`", badge.badge_id));
    out.push(format!(
        "- Jurisdiction / Framework: {} / {}",
        badge.metadata.jurisdiction, badge.metadata.framework
    ));
    out.push(format!("- Issued at: {}", badge.metadata.issued_at_utc));
    out.push(format!(
        "- Generator: v{}",
        badge.metadata.generator_version
    ));
    out.push(format!("- Inputs covered: {}", badge.metadata.input_count));
    out.push("".to_string());
    out.push("| Digest | Value |".to_string());
    out.push("|---|---|".to_string());
    out.push(format!("| inputs | `{}` |", badge.inputs_digest));
    out.push(format!("| references | `{}` |", badge.refs_digest));
    out.push(format!("| combined | `{}` |", badge.combined_digest));
    out.push("".to_string());
    out.push(format!(
        "- Validation: {} (confidence {}/100, {} finding(s))",
        if badge.validation.valid {
            "PASS"
        } else {
            "FAIL"
        },
        badge.validation.confidence,
        badge.validation.issues.len()
    ));
    out.push(format!(
        "- Proof scheme: {} (display only)",
        badge.proof.scheme
    ));
    out.push(format!("- Verify: {}", badge.verification_url));
    out.push("".to_string());
    out.join("\n")
}

pub fn render_verification_markdown(report: &VerificationReport) -> String {
    let mut out = Vec::new();
    out.push("# Verification Report".to_string());
    out.push("".to_string());
    out.push("| Check | Result |".to_string());
    out.push("|---|---|".to_string());
    out.push(format!("| hash_match | {} |", pass_fail(report.hash_match)));
    out.push(format!(
        "| timestamp_valid | {} |",
        pass_fail(report.timestamp_valid)
    ));
    out.push(format!(
        "| issuer_valid | {} |",
        pass_fail(report.issuer_valid)
    ));
    out.push(format!("| proof_valid | {} |", pass_fail(report.proof_valid)));
    out.push("".to_string());
    out.push(format!(
        "- Overall: {} (confidence {}/100)",
        pass_fail(report.valid),
        report.confidence
    ));
    out.push("".to_string());
    out.join("\n")
}

fn pass_fail(ok: bool) -> &'static str {
    if ok {
        "PASS"
    } else {
        "FAIL"
    }
}
