// ============================================================
// Layer 5 — ML / Model Layer
// ============================================================
// All model arithmetic lives here and nowhere else.
//
//   estimators.rs — the classifiers an artifact can describe
//                   (linear one-vs-rest, nearest centroid,
//                   constant), each implementing Classifier
//
//   invoker.rs    — runs one feature vector through a loaded
//                   classifier as a single-row batch
//
// Reference: Rust Book §10 (Traits), §17 (Trait Objects)

/// Concrete classifier implementations
pub mod estimators;

/// Single-vector prediction over the batch-shaped capability
pub mod invoker;
