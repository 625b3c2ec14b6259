// ============================================================
// Layer 4 — Input Pipeline
// ============================================================
// Everything between raw command-line text and a FeatureVector:
//
//   symptom mode:    JSON text ─▶ parse_symptom_list ─▶ SymptomEncoder ─▶ FeatureVector
//   raw-vector mode: arguments ─▶ parse_feature_args ──────────────────▶ FeatureVector
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Parses the JSON symptom list and decimal arguments
pub mod input;

/// Multi-hot encoding of symptom names
pub mod encoder;
