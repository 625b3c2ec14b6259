// ============================================================
// Layer 4 — Symptom Encoder
// ============================================================
// Converts a list of symptom names into a multi-hot feature
// vector: 1.0 at the index of every named symptom, 0.0
// everywhere else. The width is always the registry size.
//
// An unknown name is rejected with UnknownSymptomError and no
// vector is produced. It is never mapped to index 0, which would
// read as "symptom #0 is present".
//
// Naming the same symptom twice is harmless: the entry is
// set to 1.0 once.
//
// Example with the built-in registry:
//   ["headache", "nausea"]  →  [0, ..., 0, 1 (18), 1 (19), 0, ...]

use std::collections::HashSet;

use crate::domain::error::BridgeError;
use crate::domain::feature_vector::FeatureVector;
use crate::domain::registry::SymptomRegistry;

pub struct SymptomEncoder<'r> {
    registry: &'r SymptomRegistry,
}

impl<'r> SymptomEncoder<'r> {
    pub fn new(registry: &'r SymptomRegistry) -> Self {
        Self { registry }
    }

    /// Width of every vector this encoder produces
    pub fn width(&self) -> usize {
        self.registry.len()
    }

    pub fn encode<S: AsRef<str>>(&self, symptoms: &[S]) -> Result<FeatureVector, BridgeError> {
        // Resolve every name first so an unknown one leaves nothing behind
        let mut indices = HashSet::with_capacity(symptoms.len());
        for name in symptoms {
            let name  = name.as_ref();
            let index = self
                .registry
                .index_of(name)
                .ok_or_else(|| BridgeError::UnknownSymptom(name.to_string()))?;

            if !indices.insert(index) {
                tracing::warn!(symptom = name, "symptom listed more than once");
            }
        }

        let mut vector = FeatureVector::zeros(self.width());
        for index in indices {
            let in_range = vector.set(index, 1.0);
            debug_assert!(in_range, "registry index {index} outside [0, {})", self.width());
        }

        tracing::debug!(
            width = vector.len(),
            active = vector.count_nonzero(),
            "encoded symptom vector"
        );
        Ok(vector)
    }
}
