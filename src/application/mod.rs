// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers for a single invocation.
//
// Rules for this layer:
//   - No model arithmetic (Layer 5)
//   - No file access (Layer 6)
//   - No printing or exit codes (Layer 1)
//   - No clap types
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

/// The one-shot prediction workflow and its configuration
pub mod predict_use_case;

/// Class index → stdout payload
pub mod formatter;
