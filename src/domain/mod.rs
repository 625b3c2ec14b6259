// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums and traits that define what the
// bridge works with. Nothing in here reads files, parses
// arguments or knows how a particular estimator computes.
//
//   registry.rs       — Symptom Registry and Disease Registry
//   feature_vector.rs — the fixed-length input of a classifier
//   traits.rs         — the Classifier capability and ArtifactSource
//   error.rs          — the typed error taxonomy (BridgeError)
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

/// Static name ↔ index lookups for symptoms and diseases
pub mod registry;

/// A dense numeric feature vector
pub mod feature_vector;

/// Core abstractions that the ml and infra layers implement
pub mod traits;

/// Every way an invocation can fail
pub mod error;
