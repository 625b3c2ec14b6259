// ============================================================
// Layer 2 — Result Formatter
// ============================================================
// Turns a raw class index into what the caller reads on stdout.
//
//   labeled mode  index → Disease Registry → {"disease": "Migraine"}
//   raw mode      index as-is              → 1
//
// A labeled lookup that misses is LabelNotFound; there is no
// empty or default label.
//
// JSON payloads are written with a space after ':' and ','
// ({"disease": "Migraine"}), the spelling existing callers of
// the bridge already match on.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

use crate::application::predict_use_case::OutputMode;
use crate::domain::error::BridgeError;
use crate::domain::registry::{DiseaseRegistry, SymptomRegistry};

/// The single result of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictionOutput {
    Labeled { disease: String },
    Raw(usize),
}

#[derive(Serialize)]
struct LabeledPayload<'a> {
    disease: &'a str,
}

impl PredictionOutput {
    /// The exact line written to stdout, without the newline
    pub fn render(&self) -> serde_json::Result<String> {
        match self {
            PredictionOutput::Labeled { disease } => to_payload_line(&LabeledPayload { disease }),
            PredictionOutput::Raw(class)          => Ok(class.to_string()),
        }
    }
}

pub struct ResultFormatter<'r> {
    diseases: &'r DiseaseRegistry,
}

impl<'r> ResultFormatter<'r> {
    pub fn new(diseases: &'r DiseaseRegistry) -> Self {
        Self { diseases }
    }

    pub fn format(&self, class: usize, mode: OutputMode) -> Result<PredictionOutput, BridgeError> {
        match mode {
            OutputMode::Labeled => {
                let disease = self.diseases.resolve(class)?;
                Ok(PredictionOutput::Labeled { disease: disease.to_string() })
            }
            OutputMode::Raw => Ok(PredictionOutput::Raw(class)),
        }
    }
}

// ─── Registry listings ────────────────────────────────────────────────────────

#[derive(Serialize)]
struct SymptomListing<'a> {
    symptoms: &'a [String],
}

#[derive(Serialize)]
struct DiseaseListing<'a> {
    diseases: &'a std::collections::BTreeMap<usize, String>,
}

/// {"symptoms": [...]} where position i is the symptom with index i
pub fn render_symptom_registry(registry: &SymptomRegistry) -> serde_json::Result<String> {
    to_payload_line(&SymptomListing { symptoms: registry.names() })
}

/// {"diseases": {"0": ..., "1": ...}} ordered by class index
pub fn render_disease_registry(registry: &DiseaseRegistry) -> serde_json::Result<String> {
    to_payload_line(&DiseaseListing { diseases: registry.entries() })
}

// ─── JSON spelling ────────────────────────────────────────────────────────────

/// Compact JSON with ", " and ": " separators, on one line.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }

    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }
}

fn to_payload_line<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::with_capacity(64);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    // serde_json only ever emits UTF-8
    String::from_utf8(buf).map_err(|e| <serde_json::Error as serde::ser::Error>::custom(e))
}
