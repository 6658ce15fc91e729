use serde::{Deserialize, Serialize};

use crate::determinism::fingerprint::fingerprint;
use crate::error::CoreResult;
use crate::validator::ValidationResult;

/// Scheme tag carried by every proof payload this generator emits.
pub const PROOF_SCHEME: &str = "QLX-FNV1A32-V1";

/// The deliverable: a verifiable compliance badge. Everything in here is a
/// deterministic function of the assembly request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub badge_id: String,
    pub inputs_digest: String,
    pub refs_digest: String,
    pub combined_digest: String,
    pub verification_url: String,
    pub validation: ValidationResult,
    pub proof: ProofPayload,
    pub metadata: BadgeMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeMetadata {
    pub jurisdiction: String,
    pub framework: String,
    pub generator_version: String,
    pub issued_at_utc: String,
    pub input_count: u64,
}

/// Display-only stand-in shaped like a commitment/challenge/response
/// proof. Every field derives from the combined digest and the input
/// count; `display_only` stays `true` so downstream consumers cannot
/// mistake it for a cryptographic attestation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofPayload {
    pub scheme: String,
    pub commitment: String,
    pub challenge: String,
    pub response: String,
    pub public_signals: Vec<String>,
    pub display_only: bool,
}

impl ProofPayload {
    pub fn derive(combined_digest: &str, input_count: u64) -> CoreResult<Self> {
        let commitment = fingerprint(&combined_digest, Some("commitment"))?;
        let challenge = fingerprint(&combined_digest, Some("challenge"))?;
        let response = fingerprint(&combined_digest, Some("response"))?;
        Ok(Self {
            scheme: PROOF_SCHEME.to_string(),
            commitment,
            challenge,
            response,
            public_signals: vec![combined_digest.to_string(), format!("{:08X}", input_count)],
            display_only: true,
        })
    }
}
