use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::determinism::fingerprint::{fingerprint, proof_identifier};
use crate::error::CoreResult;
use crate::inputs::{DocumentReference, InputRecord};
use crate::progress::{NullProgress, ProgressSink, ProofStage, StageEvent};
use crate::validator::validate_references;

use super::schemas::{Badge, BadgeMetadata, ProofPayload};
use super::verify_url::build_verification_url;

pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything a badge is computed from. Two requests with equal canonical
/// forms assemble byte-identical badges; `issued_at_utc` is supplied by
/// the caller so the engine itself never reads a clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeRequest {
    pub inputs: Vec<InputRecord>,
    pub references: Vec<DocumentReference>,
    pub jurisdiction: String,
    pub framework: String,
    pub issued_at_utc: String,
}

pub fn assemble_badge(request: &BadgeRequest) -> CoreResult<Badge> {
    assemble_badge_with_progress(request, &mut NullProgress)
}

/// Assembly pipeline: fingerprint the inputs (salted by jurisdiction),
/// fingerprint the reference digests, fold both into the combined digest,
/// validate the reference graph, then emit the badge. Stage events go to
/// `sink` as each phase lands.
pub fn assemble_badge_with_progress(
    request: &BadgeRequest,
    sink: &mut dyn ProgressSink,
) -> CoreResult<Badge> {
    sink.on_stage(&StageEvent::new(
        ProofStage::Canonicalize,
        &format!(
            "{} input(s), {} reference(s)",
            request.inputs.len(),
            request.references.len()
        ),
    ));

    let inputs_digest = fingerprint(&request.inputs, Some(&request.jurisdiction))?;
    sink.on_stage(&StageEvent::new(ProofStage::FingerprintInputs, &inputs_digest));

    let reference_digests: Vec<&str> = request
        .references
        .iter()
        .map(|r| r.content_digest.as_str())
        .collect();
    let refs_digest = fingerprint(&reference_digests, None)?;
    sink.on_stage(&StageEvent::new(
        ProofStage::FingerprintReferences,
        &refs_digest,
    ));

    let combined_digest = fingerprint(
        &json!({
            "inputs_digest": inputs_digest,
            "refs_digest": refs_digest,
        }),
        None,
    )?;

    let validation = validate_references(&request.references);
    sink.on_stage(&StageEvent::new(
        ProofStage::ValidateReferences,
        &format!("{} issue(s)", validation.issues.len()),
    ));
    sink.on_stage(&StageEvent::new(
        ProofStage::ScoreConfidence,
        &validation.confidence.to_string(),
    ));

    let badge_id = proof_identifier(&combined_digest);
    let verification_url = build_verification_url(&badge_id, &combined_digest)?;
    let input_count = request.inputs.len() as u64;
    let proof = ProofPayload::derive(&combined_digest, input_count)?;

    let badge = Badge {
        badge_id,
        inputs_digest,
        refs_digest,
        combined_digest,
        verification_url,
        validation,
        proof,
        metadata: BadgeMetadata {
            jurisdiction: request.jurisdiction.clone(),
            framework: request.framework.clone(),
            generator_version: GENERATOR_VERSION.to_string(),
            issued_at_utc: request.issued_at_utc.clone(),
            input_count,
        },
    };
    sink.on_stage(&StageEvent::new(ProofStage::AssembleBadge, &badge.badge_id));
    Ok(badge)
}

/// Convenience for callers filling `issued_at_utc`. The assembly itself
/// never calls this.
pub fn now_rfc3339_utc() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap()
}
