// ============================================================
// Layer 5 — Prediction Invoker
// ============================================================
// Calls a loaded classifier for exactly one feature vector.
//
// The prediction capability is batch-shaped, so the vector is
// wrapped as a single-row batch and exactly one class index is
// expected back. Any failure is PredictionFailed carrying the
// underlying ModelError; it is never retried, since the same
// model with the same input fails the same way again.

use crate::domain::error::{BridgeError, ModelError};
use crate::domain::feature_vector::FeatureVector;
use crate::domain::traits::Classifier;

pub struct PredictionInvoker<'m> {
    model: &'m dyn Classifier,
}

impl<'m> PredictionInvoker<'m> {
    pub fn new(model: &'m dyn Classifier) -> Self {
        Self { model }
    }

    pub fn predict_one(&self, vector: FeatureVector) -> Result<usize, BridgeError> {
        if let Some(expected) = self.model.n_features() {
            if vector.len() != expected {
                return Err(ModelError::FeatureCountMismatch { expected, actual: vector.len() }.into());
            }
        }

        let batch   = [vector];
        let classes = self.model.predict(&batch)?;

        match classes.as_slice() {
            [class] => {
                tracing::debug!(estimator = self.model.estimator(), class, "prediction complete");
                Ok(*class)
            }
            other => Err(ModelError::UnexpectedBatchSize(other.len()).into()),
        }
    }
}
