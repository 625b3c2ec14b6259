// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Every failure the pipeline can hit is one variant of
// BridgeError. All of them are terminal: the invocation aborts,
// nothing is written to stdout and main turns the variant into
// a distinct exit status.
//
// The Display text of each variant starts with its kind name
// ("ArtifactNotFound: ..."), so the line written to stderr can
// be matched by the calling process without parsing anything else.
//
// Exit statuses follow the sysexits.h numbering where one fits:
//
//   InputParseError      64   input
//   UnknownSymptomError  65   input
//   ArtifactNotFound     66   infrastructure
//   ArtifactCorrupt      67   infrastructure
//   ArtifactInvalid      68   infrastructure
//   PredictionFailed     70   model
//   LabelNotFound        71   model
//
// Reference: Rust Book §9 (Error Handling)
//            thiserror crate documentation

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which side of the boundary caused the failure.
/// The caller uses this to decide whether to blame the request,
/// the deployment or the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Infrastructure,
    Model,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::Input          => "input",
            ErrorCategory::Infrastructure => "infrastructure",
            ErrorCategory::Model          => "model",
        };
        f.write_str(name)
    }
}

/// Raised by a classifier's prediction capability.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("expected {expected} features, got {actual}")]
    FeatureCountMismatch { expected: usize, actual: usize },

    #[error("prediction batch is empty")]
    EmptyBatch,

    #[error("decision score for row {row} is not finite")]
    NonFiniteScore { row: usize },

    #[error("classifier returned {0} predictions for a single-row batch")]
    UnexpectedBatchSize(usize),
}

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("InputParseError: {0}")]
    InputParse(String),

    #[error("UnknownSymptomError: '{0}' is not a registered symptom")]
    UnknownSymptom(String),

    #[error("ArtifactNotFound: no classifier artifact at '{}'", .0.display())]
    ArtifactNotFound(PathBuf),

    #[error("ArtifactCorrupt: cannot deserialize '{}': {reason}", .path.display())]
    ArtifactCorrupt { path: PathBuf, reason: String },

    #[error("ArtifactInvalid: '{}' has no usable prediction capability: {reason}", .path.display())]
    ArtifactInvalid { path: PathBuf, reason: String },

    #[error("PredictionFailed: {0}")]
    PredictionFailed(#[from] ModelError),

    #[error("LabelNotFound: class index {0} has no entry in the disease registry")]
    LabelNotFound(usize),
}

impl BridgeError {
    /// The kind name, identical to the prefix of the Display text.
    pub fn kind(&self) -> &'static str {
        match self {
            BridgeError::InputParse(_)           => "InputParseError",
            BridgeError::UnknownSymptom(_)       => "UnknownSymptomError",
            BridgeError::ArtifactNotFound(_)     => "ArtifactNotFound",
            BridgeError::ArtifactCorrupt { .. }  => "ArtifactCorrupt",
            BridgeError::ArtifactInvalid { .. }  => "ArtifactInvalid",
            BridgeError::PredictionFailed(_)     => "PredictionFailed",
            BridgeError::LabelNotFound(_)        => "LabelNotFound",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            BridgeError::InputParse(_) | BridgeError::UnknownSymptom(_) => ErrorCategory::Input,
            BridgeError::ArtifactNotFound(_)
            | BridgeError::ArtifactCorrupt { .. }
            | BridgeError::ArtifactInvalid { .. } => ErrorCategory::Infrastructure,
            BridgeError::PredictionFailed(_) | BridgeError::LabelNotFound(_) => ErrorCategory::Model,
        }
    }

    /// Process exit status reported for this failure. Never 0.
    pub fn exit_code(&self) -> u8 {
        match self {
            BridgeError::InputParse(_)           => 64,
            BridgeError::UnknownSymptom(_)       => 65,
            BridgeError::ArtifactNotFound(_)     => 66,
            BridgeError::ArtifactCorrupt { .. }  => 67,
            BridgeError::ArtifactInvalid { .. }  => 68,
            BridgeError::PredictionFailed(_)     => 70,
            BridgeError::LabelNotFound(_)        => 71,
        }
    }
}
