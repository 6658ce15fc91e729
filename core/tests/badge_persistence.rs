use qlx_core::badge::assembler::{assemble_badge, BadgeRequest};
use qlx_core::badge::schemas::Badge;
use qlx_core::inputs::{DocumentReference, InputKind, InputRecord, ReferenceRole};
use qlx_core::report::render::{render_badge_markdown, render_issues_csv};
use qlx_core::verifier::verify_badge;
use serde_json::json;

fn assembled_badge() -> Badge {
    let source = InputRecord {
        record_id: "rec_policy".to_string(),
        name: "Data Protection Policy".to_string(),
        kind: InputKind::Document,
        content_digest: Some("feedc0de11223344".to_string()),
        recorded_at_ms: 1_760_000_000_000,
        metadata: json!({"pages": 12}),
    };
    let output = InputRecord {
        record_id: "rec_assessment".to_string(),
        name: "Control Assessment".to_string(),
        kind: InputKind::Analysis,
        content_digest: Some("ab".to_string()),
        recorded_at_ms: 1_760_000_100_000,
        metadata: json!({"score": 87}),
    };
    let references = vec![
        DocumentReference::from_record(&source, ReferenceRole::Source, "audit-2026").unwrap(),
        DocumentReference::from_record(&output, ReferenceRole::Output, "audit-2026").unwrap(),
    ];
    assemble_badge(&BadgeRequest {
        inputs: vec![source, output],
        references,
        jurisdiction: "UAE".to_string(),
        framework: "VARA".to_string(),
        issued_at_utc: "2026-02-10T00:00:00Z".to_string(),
    })
    .unwrap()
}

#[test]
fn badge_json_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let badge = assembled_badge();

    // The truncated output digest and the shared relationship label keep
    // both nested lists populated across the round trip.
    assert_eq!(badge.validation.issues.len(), 1);
    assert_eq!(badge.validation.cross_references.len(), 2);

    let path = dir.path().join("badge.json");
    std::fs::write(&path, serde_json::to_string_pretty(&badge).unwrap()).unwrap();

    let restored: Badge =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(restored, badge);

    let report = verify_badge(&restored.badge_id, Some(&restored.combined_digest));
    assert!(report.valid);
}

#[test]
fn rendered_artifacts_survive_disk_with_their_identifiers() {
    let dir = tempfile::tempdir().unwrap();
    let badge = assembled_badge();

    let card_path = dir.path().join("badge.md");
    std::fs::write(&card_path, render_badge_markdown(&badge)).unwrap();
    let findings_path = dir.path().join("findings.csv");
    std::fs::write(
        &findings_path,
        render_issues_csv(&badge.validation.issues).unwrap(),
    )
    .unwrap();

    let card = std::fs::read_to_string(&card_path).unwrap();
    assert!(card.contains(&badge.badge_id));
    assert!(card.contains(&badge.verification_url));

    let findings = std::fs::read_to_string(&findings_path).unwrap();
    assert!(findings.starts_with("kind,severity,description,remediation\n"));
    assert!(findings.contains("hash_mismatch,high,"));
}
