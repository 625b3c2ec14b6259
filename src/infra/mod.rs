// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// The only layer that touches the filesystem.
//
//   artifact.rs — locates the classifier artifact, deserializes
//                 its JSON envelope and builds the estimator it
//                 describes, reporting ArtifactNotFound,
//                 ArtifactCorrupt or ArtifactInvalid
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling)

/// Classifier artifact format and loader
pub mod artifact;
