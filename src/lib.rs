//! symptom-bridge: a one-shot command-line bridge to a pretrained
//! classifier. Symptom names or a raw feature vector go in, one
//! predicted class (a disease label or a bare index) comes out on
//! stdout, and the process exits.
//!
//! Layers, from the outside in:
//!
//!   1. `cli`         — argument parsing and the stdout line
//!   2. `application` — the prediction workflow and result formatting
//!   3. `domain`      — registries, feature vectors, traits, errors
//!   4. `data`        — input parsing and symptom encoding
//!   5. `ml`          — estimators and the prediction invoker
//!   6. `infra`       — the classifier artifact on disk

pub mod cli;
pub mod application;
pub mod domain;
pub mod data;
pub mod ml;
pub mod infra;
