// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer only ever talks to these two traits:
//
//   Classifier     — anything that can turn a batch of feature
//                    vectors into one class index per row
//                    (LinearClassifier, NearestCentroid,
//                    ConstantClassifier, test stubs)
//
//   ArtifactSource — anything that can hand over a ready
//                    Classifier (ArtifactLoader reads one from
//                    disk; tests hand over a stub)
//
// Whether a deserialized artifact can predict is decided once,
// when the loader turns it into a Box<dyn Classifier>. After
// that the capability is guaranteed by the type.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Trait Objects)

use crate::domain::error::{BridgeError, ModelError};
use crate::domain::feature_vector::FeatureVector;

// ─── Classifier ───────────────────────────────────────────────────────────────
/// A pretrained model exposing a batch-shaped prediction capability.
pub trait Classifier {
    /// Short estimator name, used in log events
    fn estimator(&self) -> &'static str;

    /// Number of features the model was trained on.
    /// `None` means the model accepts any width.
    fn n_features(&self) -> Option<usize>;

    /// Predict one class index per row of `batch`.
    fn predict(&self, batch: &[FeatureVector]) -> Result<Vec<usize>, ModelError>;
}

// ─── ArtifactSource ───────────────────────────────────────────────────────────
/// Any component that can produce a loaded classifier.
pub trait ArtifactSource {
    fn load(&self) -> Result<Box<dyn Classifier>, BridgeError>;
}
