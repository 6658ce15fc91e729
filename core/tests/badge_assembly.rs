use qlx_core::badge::assembler::{
    assemble_badge, assemble_badge_with_progress, BadgeRequest, GENERATOR_VERSION,
};
use qlx_core::badge::schemas::PROOF_SCHEME;
use qlx_core::determinism::fingerprint::fingerprint;
use qlx_core::inputs::{DocumentReference, InputKind, InputRecord, ReferenceRole};
use qlx_core::progress::{ProofStage, RecordingProgress};
use serde_json::json;

fn record(id: &str, name: &str, metadata: serde_json::Value) -> InputRecord {
    InputRecord {
        record_id: id.to_string(),
        name: name.to_string(),
        kind: InputKind::Document,
        content_digest: None,
        recorded_at_ms: 1_760_000_000_000,
        metadata,
    }
}

fn request(inputs: Vec<InputRecord>, references: Vec<DocumentReference>) -> BadgeRequest {
    BadgeRequest {
        inputs,
        references,
        jurisdiction: "UAE".to_string(),
        framework: "VARA".to_string(),
        issued_at_utc: "2026-02-10T00:00:00Z".to_string(),
    }
}

#[test]
fn empty_request_assembles_a_clean_badge() {
    let badge = assemble_badge(&request(vec![], vec![])).unwrap();
    assert!(badge.badge_id.starts_with("qlx_proof_"));
    assert_eq!(badge.combined_digest.len(), 8);
    assert!(badge.validation.issues.is_empty());
    assert!(badge.validation.valid);
    assert_eq!(badge.validation.confidence, 100);
    assert_eq!(badge.metadata.input_count, 0);
    assert_eq!(badge.metadata.jurisdiction, "UAE");
    assert_eq!(badge.metadata.framework, "VARA");
    assert_eq!(badge.metadata.generator_version, GENERATOR_VERSION);
}

#[test]
fn assembly_is_reproducible() {
    let req = request(
        vec![record("rec_1", "Policy", json!({"pages": 12}))],
        vec![],
    );
    let a = assemble_badge(&req).unwrap();
    let b = assemble_badge(&req).unwrap();
    assert_eq!(a, b);
}

#[test]
fn input_order_does_not_change_the_badge_id() {
    let first = record("rec_1", "Alpha", json!({"k": 1}));
    let second = record("rec_2", "Beta", json!({"k": 2}));
    let a = assemble_badge(&request(vec![first.clone(), second.clone()], vec![])).unwrap();
    let b = assemble_badge(&request(vec![second, first], vec![])).unwrap();
    assert_eq!(a.badge_id, b.badge_id);
    assert_eq!(a.inputs_digest, b.inputs_digest);
    assert_eq!(a.combined_digest, b.combined_digest);
}

#[test]
fn metadata_noise_does_not_change_the_badge_id() {
    let a = record("rec_1", "Alpha", json!({"x": 1, "y": [2, 1]}));
    let b = record("rec_1", "  Alpha  ", json!({"y": [1, 2], "x": 1}));
    let badge_a = assemble_badge(&request(vec![a], vec![])).unwrap();
    let badge_b = assemble_badge(&request(vec![b], vec![])).unwrap();
    assert_eq!(badge_a.badge_id, badge_b.badge_id);
}

#[test]
fn scalar_changes_move_the_badge_id() {
    let a = assemble_badge(&request(
        vec![record("rec_1", "Alpha", json!({"k": 1}))],
        vec![],
    ))
    .unwrap();
    let b = assemble_badge(&request(
        vec![record("rec_1", "Alpha", json!({"k": 2}))],
        vec![],
    ))
    .unwrap();
    assert_ne!(a.badge_id, b.badge_id);
}

#[test]
fn jurisdiction_salts_the_inputs_digest() {
    let inputs = vec![record("rec_1", "Alpha", json!({}))];
    let mut req_uae = request(inputs.clone(), vec![]);
    req_uae.jurisdiction = "UAE".to_string();
    let mut req_ksa = request(inputs, vec![]);
    req_ksa.jurisdiction = "KSA".to_string();
    let a = assemble_badge(&req_uae).unwrap();
    let b = assemble_badge(&req_ksa).unwrap();
    assert_ne!(a.inputs_digest, b.inputs_digest);
    assert_ne!(a.badge_id, b.badge_id);
}

#[test]
fn refs_digest_is_the_fingerprint_of_the_reference_digests() {
    let source = record("rec_1", "Alpha", json!({}));
    let output = record("rec_2", "Beta", json!({}));
    let references = vec![
        DocumentReference::from_record(&source, ReferenceRole::Source, "rel").unwrap(),
        DocumentReference::from_record(&output, ReferenceRole::Output, "rel").unwrap(),
    ];
    let digests: Vec<&str> = references
        .iter()
        .map(|r| r.content_digest.as_str())
        .collect();
    let expected = fingerprint(&digests, None).unwrap();

    let badge = assemble_badge(&request(vec![source, output], references)).unwrap();
    assert_eq!(badge.refs_digest, expected);
}

#[test]
fn validation_findings_land_on_the_badge() {
    let source = record("rec_1", "Alpha", json!({}));
    let references =
        vec![DocumentReference::from_record(&source, ReferenceRole::Source, "").unwrap()];
    let badge = assemble_badge(&request(vec![source], references)).unwrap();
    assert_eq!(badge.validation.issues.len(), 1);
    assert_eq!(badge.validation.confidence, 95);
    assert!(badge.validation.valid);
}

#[test]
fn verification_url_embeds_id_and_digest() {
    let badge = assemble_badge(&request(vec![], vec![])).unwrap();
    assert_eq!(
        badge.verification_url,
        format!(
            "https://verify.qlx.app/badge/{}?hash={}",
            badge.badge_id, badge.combined_digest
        )
    );
}

#[test]
fn proof_payload_is_derived_and_display_only() {
    let badge = assemble_badge(&request(
        vec![record("rec_1", "Alpha", json!({}))],
        vec![],
    ))
    .unwrap();
    assert_eq!(badge.proof.scheme, PROOF_SCHEME);
    assert!(badge.proof.display_only);
    for hexish in [
        &badge.proof.commitment,
        &badge.proof.challenge,
        &badge.proof.response,
    ] {
        assert_eq!(hexish.len(), 8);
    }
    assert_eq!(
        badge.proof.public_signals,
        vec![badge.combined_digest.clone(), "00000001".to_string()]
    );
    assert_ne!(badge.proof.commitment, badge.proof.challenge);
    assert_ne!(badge.proof.challenge, badge.proof.response);
}

#[test]
fn derived_digests_fill_missing_content_digests() {
    let source = record("rec_1", "Alpha", json!({}));
    let reference = DocumentReference::from_record(&source, ReferenceRole::Source, "rel").unwrap();
    assert_eq!(reference.content_digest.len(), 8);

    let mut with_digest = source.clone();
    with_digest.content_digest = Some("feedc0de11223344".to_string());
    let carried =
        DocumentReference::from_record(&with_digest, ReferenceRole::Source, "rel").unwrap();
    assert_eq!(carried.content_digest, "feedc0de11223344");
}

#[test]
fn progress_sink_observes_without_influencing() {
    let req = request(
        vec![record("rec_1", "Alpha", json!({"k": 1}))],
        vec![],
    );
    let mut progress = RecordingProgress::default();
    let observed = assemble_badge_with_progress(&req, &mut progress).unwrap();
    let silent = assemble_badge(&req).unwrap();
    assert_eq!(observed, silent);

    let stages: Vec<ProofStage> = progress.events.iter().map(|e| e.stage).collect();
    assert_eq!(
        stages,
        vec![
            ProofStage::Canonicalize,
            ProofStage::FingerprintInputs,
            ProofStage::FingerprintReferences,
            ProofStage::ValidateReferences,
            ProofStage::ScoreConfidence,
            ProofStage::AssembleBadge,
        ]
    );
    assert_eq!(progress.events[1].detail, observed.inputs_digest);
    assert_eq!(progress.events[5].detail, observed.badge_id);
}
