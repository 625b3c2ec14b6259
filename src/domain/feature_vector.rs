// ============================================================
// Layer 3 — FeatureVector Domain Type
// ============================================================
// The ordered sequence of real numbers a classifier consumes.
// Built fresh for every invocation, either by the symptom
// encoder (width = Symptom Registry size) or straight from the
// command line (width = whatever the model was trained on),
// and dropped once the prediction is made.

/// A dense feature vector owned by a single prediction call.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// An all-zero vector of the given width
    pub fn zeros(len: usize) -> Self {
        Self { values: vec![0.0; len] }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Set one position. Returns false when `index` is out of range
    /// and leaves the vector untouched.
    pub fn set(&mut self, index: usize, value: f64) -> bool {
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Number of positions holding a non-zero value
    pub fn count_nonzero(&self) -> usize {
        self.values.iter().filter(|v| **v != 0.0).count()
    }
}
