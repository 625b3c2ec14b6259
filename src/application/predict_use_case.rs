// ============================================================
// Layer 2 — Predict Use Case
// ============================================================
// Runs one invocation from input to output, in order:
//
//   Step 1: Build the feature vector   (Layer 4 - data)
//             symptom mode → parse JSON, encode
//             vector mode  → parse decimals
//   Step 2: Load the classifier        (Layer 6 - infra)
//   Step 3: Predict one class index    (Layer 5 - ml)
//   Step 4: Format the result          (Layer 2 - formatter)
//
// The path is linear. Each step either hands its value to the
// next or returns a BridgeError that ends the invocation; no
// partial result is ever produced. Input is checked before the
// artifact is touched, so a malformed request never pays for a
// model load.
//
// Reference: Rust Book §9 (The ? Operator)

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::application::formatter::{PredictionOutput, ResultFormatter};
use crate::data::{encoder::SymptomEncoder, input};
use crate::domain::error::BridgeError;
use crate::domain::registry::{DiseaseRegistry, SymptomRegistry};
use crate::domain::traits::ArtifactSource;
use crate::infra::artifact::ArtifactLoader;
use crate::ml::invoker::PredictionInvoker;

/// Where the deployed classifier artifact lives, relative to the
/// working directory of the process.
pub const DEFAULT_MODEL_PATH: &str = "models/svc.json";

/// Deployment-level override for DEFAULT_MODEL_PATH
pub const MODEL_PATH_ENV: &str = "SYMPTOM_BRIDGE_MODEL";

// ─── Configuration ───────────────────────────────────────────────────────────

/// How the predicted class is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Resolve the index through the Disease Registry
    Labeled,
    /// Print the index itself
    Raw,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictConfig {
    pub model_path: PathBuf,
    pub output:     OutputMode,
}

impl PredictConfig {
    /// Config for this deployment: the model path comes from the
    /// environment, never from the invocation's arguments.
    pub fn new(output: OutputMode) -> Self {
        Self { model_path: Self::deployed_model_path(), output }
    }

    pub fn deployed_model_path() -> PathBuf {
        env::var_os(MODEL_PATH_ENV)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH))
    }
}

/// The raw request, exactly as it came off the command line
#[derive(Debug, Clone, PartialEq)]
pub enum PredictInput {
    /// A JSON array of symptom names
    Symptoms(String),
    /// Decimal arguments, possibly comma-separated
    Vector(Vec<String>),
}

// ─── Use Case ────────────────────────────────────────────────────────────────

pub struct PredictUseCase<'r, A> {
    source:    A,
    symptoms:  &'r SymptomRegistry,
    formatter: ResultFormatter<'r>,
    output:    OutputMode,
}

impl PredictUseCase<'static, ArtifactLoader> {
    /// The deployed pipeline: artifact on disk, built-in registries.
    pub fn new(config: &PredictConfig) -> Self {
        Self::with_parts(
            ArtifactLoader::new(config.model_path.clone()),
            SymptomRegistry::builtin(),
            DiseaseRegistry::builtin(),
            config.output,
        )
    }
}

impl<'r, A: ArtifactSource> PredictUseCase<'r, A> {
    pub fn with_parts(
        source:   A,
        symptoms: &'r SymptomRegistry,
        diseases: &'r DiseaseRegistry,
        output:   OutputMode,
    ) -> Self {
        Self {
            source,
            symptoms,
            formatter: ResultFormatter::new(diseases),
            output,
        }
    }

    pub fn execute(&self, request: &PredictInput) -> Result<PredictionOutput, BridgeError> {
        // Step 1
        let vector = match request {
            PredictInput::Symptoms(json) => {
                let names = input::parse_symptom_list(json)?;
                SymptomEncoder::new(self.symptoms).encode(&names)?
            }
            PredictInput::Vector(args) => input::parse_feature_args(args)?,
        };

        // Step 2
        let model = self.source.load()?;

        // Step 3
        let class = PredictionInvoker::new(model.as_ref()).predict_one(vector)?;

        // Step 4
        self.formatter.format(class, self.output)
    }
}
