// ============================================================
// Layer 6 — Artifact Loader
// ============================================================
// Restores a pretrained classifier from disk.
//
// Artifact file format (JSON):
//
//   {
//     "format":    "symptom-bridge/classifier",
//     "version":   1,
//     "estimator": "linear" | "nearest_centroid" | "constant",
//     "params":    { ...estimator specific... }
//   }
//
// Loading happens in three checks, each with its own failure:
//
//   1. the file can be read; a missing
//      file is                             → ArtifactNotFound
//   2. it deserializes into the envelope,
//      with our format tag and version     → ArtifactCorrupt
//   3. the envelope describes an estimator
//      that can actually predict           → ArtifactInvalid
//
// Step 3 is where the prediction capability is checked, once;
// the result is a Box<dyn Classifier>, so nothing downstream has
// to ask again. There is no fallback artifact and no retry.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (Reading a File)

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::domain::error::BridgeError;
use crate::domain::traits::{ArtifactSource, Classifier};
use crate::ml::estimators::{
    CentroidParams, ConstantClassifier, ConstantParams, LinearClassifier, LinearParams,
    NearestCentroid,
};

/// Tag every artifact must carry in its "format" field
pub const ARTIFACT_FORMAT: &str = "symptom-bridge/classifier";

/// The only envelope version this build understands
pub const ARTIFACT_VERSION: u32 = 1;

/// The outer shape of an artifact file. `params` stays untyped
/// until the estimator is known.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactEnvelope {
    pub format:    String,
    pub version:   u32,
    pub estimator: String,
    #[serde(default)]
    pub params:    serde_json::Value,
}

/// Reads a classifier artifact from a fixed path.
#[derive(Debug, Clone)]
pub struct ArtifactLoader {
    path: PathBuf,
}

impl ArtifactLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Steps 1 and 2: find the file and deserialize the envelope.
    fn read_envelope(&self) -> Result<ArtifactEnvelope, BridgeError> {
        let corrupt = |reason: String| BridgeError::ArtifactCorrupt {
            path: self.path.clone(),
            reason,
        };

        // only a missing file is "not found"; a permission or other
        // I/O failure on an existing path is reported as unreadable
        let bytes = fs::read(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => BridgeError::ArtifactNotFound(self.path.clone()),
            _ => corrupt(format!("read failed: {e}")),
        })?;
        let envelope: ArtifactEnvelope =
            serde_json::from_slice(&bytes).map_err(|e| corrupt(e.to_string()))?;

        if envelope.format != ARTIFACT_FORMAT {
            return Err(corrupt(format!(
                "format is '{}', expected '{ARTIFACT_FORMAT}'",
                envelope.format
            )));
        }
        if envelope.version != ARTIFACT_VERSION {
            return Err(corrupt(format!(
                "version {} is not supported, expected {ARTIFACT_VERSION}",
                envelope.version
            )));
        }

        Ok(envelope)
    }
}

impl ArtifactSource for ArtifactLoader {
    fn load(&self) -> Result<Box<dyn Classifier>, BridgeError> {
        let envelope = self.read_envelope()?;

        // Step 3: does this envelope describe something that can predict?
        let model = build_classifier(&envelope.estimator, envelope.params).map_err(|e| {
            BridgeError::ArtifactInvalid {
                path:   self.path.clone(),
                reason: format!("{e:#}"),
            }
        })?;

        tracing::info!(
            path = %self.path.display(),
            estimator = model.estimator(),
            n_features = ?model.n_features(),
            "classifier artifact loaded"
        );
        Ok(model)
    }
}

/// Turn an estimator name and its raw parameters into a classifier.
pub fn build_classifier(
    estimator: &str,
    params:    serde_json::Value,
) -> anyhow::Result<Box<dyn Classifier>> {
    let model: Box<dyn Classifier> = match estimator {
        "linear" => {
            let params: LinearParams = serde_json::from_value(params)
                .context("params do not describe a linear classifier")?;
            Box::new(LinearClassifier::new(params)?)
        }
        "nearest_centroid" => {
            let params: CentroidParams = serde_json::from_value(params)
                .context("params do not describe a nearest-centroid classifier")?;
            Box::new(NearestCentroid::new(params)?)
        }
        "constant" => {
            let params: ConstantParams = serde_json::from_value(params)
                .context("params do not describe a constant classifier")?;
            Box::new(ConstantClassifier::new(params)?)
        }
        other => anyhow::bail!("estimator '{other}' has no prediction capability"),
    };
    Ok(model)
}
