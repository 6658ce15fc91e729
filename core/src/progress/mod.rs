use serde::{Deserialize, Serialize};

/// Stages a badge assembly passes through, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProofStage {
    Canonicalize,
    FingerprintInputs,
    FingerprintReferences,
    ValidateReferences,
    ScoreConfidence,
    AssembleBadge,
}

impl ProofStage {
    pub fn label(self) -> &'static str {
        match self {
            ProofStage::Canonicalize => "CANONICALIZE",
            ProofStage::FingerprintInputs => "FINGERPRINT_INPUTS",
            ProofStage::FingerprintReferences => "FINGERPRINT_REFERENCES",
            ProofStage::ValidateReferences => "VALIDATE_REFERENCES",
            ProofStage::ScoreConfidence => "SCORE_CONFIDENCE",
            ProofStage::AssembleBadge => "ASSEMBLE_BADGE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageEvent {
    pub stage: ProofStage,
    pub detail: String,
}

impl StageEvent {
    pub fn new(stage: ProofStage, detail: &str) -> Self {
        Self {
            stage,
            detail: detail.to_string(),
        }
    }
}

/// Reporting surface for long-running assemblies. Sinks observe stages,
/// they never feed anything back; the assembled badge is byte-identical
/// with or without one attached.
pub trait ProgressSink {
    fn on_stage(&mut self, event: &StageEvent);
}

/// Sink that drops everything. Used by the plain assembly entry point.
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn on_stage(&mut self, _event: &StageEvent) {}
}

/// Sink that keeps every event, for tools and tests.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub events: Vec<StageEvent>,
}

impl ProgressSink for RecordingProgress {
    fn on_stage(&mut self, event: &StageEvent) {
        self.events.push(event.clone());
    }
}
