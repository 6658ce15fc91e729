use serde::Serialize;
use sha2::{Digest, Sha256};
use ulid::Ulid;

use crate::determinism::canonical::to_canonical_bytes;
use crate::error::CoreResult;

pub const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
pub const FNV_PRIME: u32 = 0x0100_0193;

/// Prefix shared by every identifier this generator issues.
pub const ISSUER_PREFIX: &str = "qlx_";
pub const PROOF_ID_PREFIX: &str = "qlx_proof_";

/// 32-bit FNV-1a over raw bytes: xor the byte into the accumulator, then
/// multiply by the prime, with wrapping arithmetic.
pub fn fnv1a32(bytes: &[u8]) -> u32 {
    let mut acc = FNV_OFFSET_BASIS;
    for b in bytes {
        acc ^= u32::from(*b);
        acc = acc.wrapping_mul(FNV_PRIME);
    }
    acc
}

/// Eight-uppercase-hex fingerprint of the canonical form of `value`.
/// A salt, when present, is appended to the canonical bytes as `:(salt)`
/// so the same value fingerprints differently per scope. Fingerprints are
/// stable identity tags, not a tamper-evidence boundary.
pub fn fingerprint<T: Serialize>(value: &T, salt: Option<&str>) -> CoreResult<String> {
    let mut bytes = to_canonical_bytes(value)?;
    if let Some(salt) = salt {
        bytes.push(b':');
        bytes.extend_from_slice(salt.as_bytes());
    }
    Ok(format!("{:08X}", fnv1a32(&bytes)))
}

/// Full-strength digest for document contents supplied by callers.
pub fn content_sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

pub fn proof_identifier(combined_digest: &str) -> String {
    format!("{}{}", PROOF_ID_PREFIX, combined_digest)
}

/// Label for one tool invocation. Unlike fingerprints this is deliberately
/// unique per call; it never participates in badge identity.
pub fn adhoc_run_id() -> String {
    format!("r_{}", Ulid::new())
}
