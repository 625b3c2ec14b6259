// ============================================================
// Layer 3 — Label Registries
// ============================================================
// Two read-only lookups shared by the whole process:
//
//   SymptomRegistry  — symptom name → feature-vector index
//   DiseaseRegistry  — class index  → human-readable disease
//
// The built-in tables are built once behind a OnceLock and are
// never mutated afterwards. Symptom indices are the positions in
// SYMPTOM_NAMES, so they are dense over [0, N) by construction;
// N is the width of every encoded symptom vector.
//
// Custom registries (tests, alternative deployments) go through
// the validating constructors, which reject duplicate names and
// duplicate class indices.
//
// Reference: Rust Book §8 (Hash Maps)
//            std::sync::OnceLock documentation

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use thiserror::Error;

use crate::domain::error::BridgeError;

/// Symptom names in feature-vector order: index i is SYMPTOM_NAMES[i].
pub const SYMPTOM_NAMES: [&str; 50] = [
    "itching", "skin_rash", "nodal_skin_eruptions",
    "continuous_sneezing", "shivering", "chills",
    "joint_pain", "muscle_wasting", "swelling",
    "malaise", "fatigue", "vomiting",
    "diarrhea", "cough", "shortness_of_breath",
    "chest_pain", "palpitations", "dizziness",
    "headache", "nausea", "loss_of_appetite",
    "pain_behind_eyes", "back_pain", "constipation",
    "abdominal_pain", "yellowish_skin", "dark_urine",
    "blister", "red_spots_over_body", "cough_with_blood",
    "sweating", "altered_sensorium", "weakness_of_one_body_side",
    "swelling_of_stomach", "swelling_of_legs", "fast_heart_rate",
    "breathlessness", "numbness", "tingling_sensation",
    "fever", "headache_with_nausea", "bloody_stool",
    "irregular_menstruation", "bloody_urine", "blurry_vision",
    "sore_throat", "painful_urination", "nose_bleed",
    "uncontrolled_hunger", "sudden_vision_loss",
];

/// Disease labels by class index. Spelling is kept exactly as the
/// deployed classifier was trained with.
pub const DISEASE_LABELS: [&str; 50] = [
    "Fungal infection", "Allergy", "GERD",
    "Chronic cholestasis", "Drug Reaction", "Peptic ulcer diseae",
    "AIDS", "Diabetes", "Gastroenteritis", "Bronchial Asthma",
    "Hypertension", "Migraine", "Cervical spondylosis", "Paralysis (brain hemorrhage)",
    "Jaundice", "Malaria", "Chicken pox", "Dengue",
    "Typhoid", "Tuberculosis", "Common Cold", "Pneumonia",
    "Dimorphic hemmorhoids(piles)", "Heart attack", "Varicose veins",
    "Hypothyroidism", "Hyperthyroidism", "Hypoglycemia",
    "Osteoarthristis", "Arthritis", "Enteric fever",
    "Acne", "Urinary tract infection", "Psoriasis", "Impetigo",
    "Hepatitis A", "Hepatitis B", "Hepatitis C", "Hepatitis D",
    "Hepatitis E", "Chronic hepatitis", "Acute liver failure",
    "Alcoholic hepatitis", "Cirrhosis", "Liver cancer",
    "Colorectal cancer", "Lung cancer", "Stomach cancer",
    "Leukemia", "Non-Hodgkin lymphoma",
];

static BUILTIN_SYMPTOMS: OnceLock<SymptomRegistry> = OnceLock::new();
static BUILTIN_DISEASES: OnceLock<DiseaseRegistry> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("symptom '{0}' is registered more than once")]
    DuplicateSymptom(String),

    #[error("class index {0} is registered more than once")]
    DuplicateClass(usize),

    #[error("registry entries must have a non-empty name")]
    EmptyName,
}

// ─── SymptomRegistry ──────────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct SymptomRegistry {
    /// Names in index order
    names: Vec<String>,
    /// Reverse lookup name → index
    index: HashMap<String, usize>,
}

impl SymptomRegistry {
    /// Build a registry whose indices are the positions in `names`.
    pub fn from_names<I, S>(names: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self { names: Vec::new(), index: HashMap::new() };
        for name in names {
            let name = name.into();
            if name.is_empty() {
                return Err(RegistryError::EmptyName);
            }
            if registry.index.contains_key(&name) {
                return Err(RegistryError::DuplicateSymptom(name));
            }
            registry.index.insert(name.clone(), registry.names.len());
            registry.names.push(name);
        }
        Ok(registry)
    }

    /// The process-wide registry built from SYMPTOM_NAMES.
    pub fn builtin() -> &'static SymptomRegistry {
        BUILTIN_SYMPTOMS.get_or_init(|| {
            let names: Vec<String> = SYMPTOM_NAMES.iter().map(|s| s.to_string()).collect();
            let index = names.iter().cloned().zip(0..).collect();
            SymptomRegistry { names, index }
        })
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Number of symptoms, which is also the encoded vector width
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in index order
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

// ─── DiseaseRegistry ──────────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct DiseaseRegistry {
    labels: BTreeMap<usize, String>,
}

impl DiseaseRegistry {
    /// Build a registry from explicit (class index, label) pairs.
    /// The indices do not have to be contiguous.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (usize, S)>,
        S: Into<String>,
    {
        let mut labels = BTreeMap::new();
        for (class, label) in entries {
            let label = label.into();
            if label.is_empty() {
                return Err(RegistryError::EmptyName);
            }
            if labels.insert(class, label).is_some() {
                return Err(RegistryError::DuplicateClass(class));
            }
        }
        Ok(Self { labels })
    }

    /// The process-wide registry built from DISEASE_LABELS.
    pub fn builtin() -> &'static DiseaseRegistry {
        BUILTIN_DISEASES.get_or_init(|| DiseaseRegistry {
            labels: DISEASE_LABELS
                .iter()
                .enumerate()
                .map(|(i, label)| (i, label.to_string()))
                .collect(),
        })
    }

    pub fn label(&self, class: usize) -> Option<&str> {
        self.labels.get(&class).map(String::as_str)
    }

    /// Resolve a class index emitted by the classifier.
    /// A miss means the registry and the model have drifted apart.
    pub fn resolve(&self, class: usize) -> Result<&str, BridgeError> {
        self.label(class).ok_or(BridgeError::LabelNotFound(class))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// All entries, ordered by class index
    pub fn entries(&self) -> &BTreeMap<usize, String> {
        &self.labels
    }
}
