use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::determinism::fingerprint::fingerprint;
use crate::error::CoreResult;

/// Category a captured workflow artifact belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Document,
    Badge,
    Analysis,
    Business,
    Idea,
    Custom,
}

/// One artifact captured from the workflow. `metadata` is free-form and
/// flows into the badge fingerprint untouched apart from canonicalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub record_id: String,
    pub name: String,
    pub kind: InputKind,
    pub content_digest: Option<String>,
    pub recorded_at_ms: u64,
    pub metadata: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceRole {
    Source,
    Dependency,
    Output,
}

/// Edge of the reference graph the validator walks. `relationship` is a
/// caller-chosen label; references sharing a label are treated as related.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReference {
    pub reference_id: String,
    pub name: String,
    pub content_digest: String,
    pub role: ReferenceRole,
    pub relationship: String,
}

impl DocumentReference {
    /// Build a reference from a captured record. Records without a content
    /// digest get one derived from their own canonical form, so the graph
    /// never carries empty digest slots for well-formed records.
    pub fn from_record(
        record: &InputRecord,
        role: ReferenceRole,
        relationship: &str,
    ) -> CoreResult<Self> {
        let content_digest = match &record.content_digest {
            Some(digest) => digest.clone(),
            None => derived_record_digest(record)?,
        };
        Ok(Self {
            reference_id: record.record_id.clone(),
            name: record.name.clone(),
            content_digest,
            role,
            relationship: relationship.to_string(),
        })
    }
}

/// Fingerprint of the record with the digest slot itself left out, so the
/// derived value is the same whether the slot was `None` or absent.
pub fn derived_record_digest(record: &InputRecord) -> CoreResult<String> {
    fingerprint(
        &json!({
            "record_id": record.record_id,
            "name": record.name,
            "kind": record.kind,
            "recorded_at_ms": record.recorded_at_ms,
            "metadata": record.metadata,
        }),
        None,
    )
}
