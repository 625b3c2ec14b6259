// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Three subcommands:
//
//   symptoms '<json>'   symptom mode, labeled output by default
//   vector <v>...       raw-vector mode, raw output by default
//   registry <which>    print a built-in registry as JSON
//
// `--output labeled|raw` picks the output mode independently of
// the input mode. The artifact path is deliberately not an
// argument; it belongs to the deployment (see PredictConfig).
//
// Values are taken as plain strings, hyphens included, so that
// malformed input ("-abc") is reported by the data layer as
// InputParseError rather than as a clap usage error. Because the
// value list swallows everything after its first entry, flags of
// the vector subcommand go before the values:
//
//   vector --output labeled -0.5 1.2
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};

use crate::application::predict_use_case::{OutputMode, PredictInput};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict a disease from a JSON array of symptom names
    Symptoms(SymptomsArgs),

    /// Predict a class from a raw numeric feature vector
    Vector(VectorArgs),

    /// Print a built-in registry as JSON
    Registry(RegistryArgs),
}

/// CLI spelling of OutputMode
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputArg {
    /// {"disease": "<label>"}
    Labeled,
    /// the bare class index
    Raw,
}

impl From<OutputArg> for OutputMode {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Labeled => OutputMode::Labeled,
            OutputArg::Raw     => OutputMode::Raw,
        }
    }
}

#[derive(Args, Debug)]
pub struct SymptomsArgs {
    /// JSON array of symptom names, e.g. '["headache","nausea"]'
    pub symptoms: String,

    /// How to report the predicted class
    #[arg(long, value_enum, default_value_t = OutputArg::Labeled)]
    pub output: OutputArg,
}

impl From<&SymptomsArgs> for PredictInput {
    fn from(args: &SymptomsArgs) -> Self {
        PredictInput::Symptoms(args.symptoms.clone())
    }
}

#[derive(Args, Debug)]
pub struct VectorArgs {
    /// Feature values in training order; "1.0 2.5" and "1.0,2.5" are equivalent.
    /// Must come after any flag.
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub values: Vec<String>,

    /// How to report the predicted class
    #[arg(long, value_enum, default_value_t = OutputArg::Raw)]
    pub output: OutputArg,
}

impl From<&VectorArgs> for PredictInput {
    fn from(args: &VectorArgs) -> Self {
        PredictInput::Vector(args.values.clone())
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryKind {
    /// symptom name by feature index
    Symptoms,
    /// disease label by class index
    Diseases,
}

#[derive(Args, Debug)]
pub struct RegistryArgs {
    /// Which registry to print
    #[arg(value_enum)]
    pub which: RegistryKind,
}
