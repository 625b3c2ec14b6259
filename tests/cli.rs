use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::{json, Value};
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_symptom-bridge");

/// A scratch deployment directory holding `models/svc.json`.
fn deployment(artifact: Option<&str>) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    if let Some(contents) = artifact {
        fs::create_dir_all(dir.path().join("models")).unwrap();
        fs::write(dir.path().join("models/svc.json"), contents).unwrap();
    }
    dir
}

fn artifact(estimator: &str, params: Value) -> String {
    json!({
        "format":    "symptom-bridge/classifier",
        "version":   1,
        "estimator": estimator,
        "params":    params,
    })
    .to_string()
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .current_dir(dir)
        .env_remove("SYMPTOM_BRIDGE_MODEL")
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn symptom-bridge")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

/// Binary linear model over the 50 built-in symptoms:
/// headache (18) + nausea (19) together push the score above zero.
fn migraine_model() -> String {
    let mut coef = vec![0.0_f64; 50];
    coef[18] = 1.0;
    coef[19] = 1.0;
    artifact("linear", json!({"classes": [0, 11], "coef": [coef], "intercept": [-1.5]}))
}

#[test]
fn e2e_symptoms_labeled_with_linear_model() {
    let dir = deployment(Some(&migraine_model()));

    let out = run(dir.path(), &["symptoms", r#"["headache","nausea"]"#]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "{\"disease\": \"Migraine\"}\n");

    let out = run(dir.path(), &["symptoms", r#"["headache"]"#]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "{\"disease\": \"Fungal infection\"}\n");
}

#[test]
fn e2e_symptoms_with_constant_model() {
    let dir = deployment(Some(&artifact("constant", json!({"class": 7}))));
    let out = run(dir.path(), &["symptoms", r#"["headache","nausea"]"#]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out).trim_end(), r#"{"disease": "Diabetes"}"#);
}

#[test]
fn e2e_vector_raw_binary_outcome() {
    let dir = deployment(Some(&artifact("constant", json!({"class": 1}))));

    let out = run(dir.path(), &["vector", "1.0,2.5,3.3"]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "1\n");

    let out = run(dir.path(), &["vector", "1.0", "2.5", "3.3"]);
    assert_eq!(stdout(&out), "1\n");
}

#[test]
fn e2e_vector_with_labeled_output() {
    let dir = deployment(Some(&artifact("constant", json!({"class": 11}))));
    let out = run(dir.path(), &["vector", "--output", "labeled", "0.2"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim_end(), r#"{"disease": "Migraine"}"#);
}

#[test]
fn e2e_vector_leading_dot_negative() {
    let dir = deployment(Some(&artifact("constant", json!({"class": 3}))));
    let out = run(dir.path(), &["vector", "-.5"]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "3\n");

    let out = run(dir.path(), &["vector", "-1.5,2", "-0.25"]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "3\n");
}

#[test]
fn e2e_hyphen_leading_garbage_is_input_parse_error() {
    // no artifact: a clap rejection would be exit 2, the loader exit 66
    let dir = deployment(None);
    for args in [&["vector", "-abc"][..], &["vector", "1.0", "-x"][..]] {
        let out = run(dir.path(), args);
        assert_eq!(out.status.code(), Some(64), "args {args:?}, stderr: {}", stderr(&out));
        assert!(stdout(&out).is_empty());
        assert!(stderr(&out).starts_with("InputParseError:"), "stderr: {}", stderr(&out));
    }
}

#[test]
fn e2e_non_numeric_fails_before_loading() {
    // no models/ directory: reaching the loader would be ArtifactNotFound (66)
    let dir = deployment(None);
    let out = run(dir.path(), &["vector", "abc"]);
    assert_eq!(out.status.code(), Some(64));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).starts_with("InputParseError:"), "stderr: {}", stderr(&out));
}

#[test]
fn e2e_malformed_json() {
    let dir = deployment(Some(&migraine_model()));
    let out = run(dir.path(), &["symptoms", "headache,nausea"]);
    assert_eq!(out.status.code(), Some(64));
    assert!(stdout(&out).is_empty());
}

#[test]
fn e2e_unknown_symptom() {
    let dir = deployment(Some(&migraine_model()));
    let out = run(dir.path(), &["symptoms", r#"["headache","glowing_skin"]"#]);
    assert_eq!(out.status.code(), Some(65));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("UnknownSymptomError: 'glowing_skin'"));
}

#[test]
fn e2e_missing_artifact() {
    let dir = deployment(None);
    let out = run(dir.path(), &["symptoms", r#"["headache"]"#]);
    assert_eq!(out.status.code(), Some(66));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).starts_with("ArtifactNotFound:"));
}

#[test]
fn e2e_corrupt_artifact() {
    let dir = deployment(Some("not a model"));
    let out = run(dir.path(), &["symptoms", r#"["headache"]"#]);
    assert_eq!(out.status.code(), Some(67));
    assert!(stderr(&out).starts_with("ArtifactCorrupt:"));
}

#[test]
fn e2e_artifact_without_prediction_capability() {
    let dir = deployment(Some(&artifact("standard_scaler", json!({"mean": [0.0], "scale": [1.0]}))));
    let out = run(dir.path(), &["symptoms", r#"["headache"]"#]);
    assert_eq!(out.status.code(), Some(68));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).starts_with("ArtifactInvalid:"));
}

#[test]
fn e2e_feature_count_mismatch_is_prediction_failure() {
    let params = json!({"classes": [0, 1], "coef": [[1.0, 1.0, 1.0]], "intercept": [0.0]});
    let dir = deployment(Some(&artifact("linear", params)));
    // symptom vectors are 50 wide, the model expects 3
    let out = run(dir.path(), &["symptoms", r#"["cough"]"#]);
    assert_eq!(out.status.code(), Some(70));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).starts_with("PredictionFailed:"));
}

#[test]
fn e2e_label_drift() {
    let dir = deployment(Some(&artifact("constant", json!({"class": 99}))));
    let out = run(dir.path(), &["symptoms", r#"["cough"]"#]);
    assert_eq!(out.status.code(), Some(71));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).starts_with("LabelNotFound:"));

    // raw mode has nothing to resolve
    let out = run(dir.path(), &["symptoms", r#"["cough"]"#, "--output", "raw"]);
    assert_eq!(stdout(&out), "99\n");
}

#[test]
fn e2e_model_path_from_environment() {
    let dir = deployment(None);
    let custom = dir.path().join("elsewhere.json");
    fs::write(&custom, artifact("constant", json!({"class": 0}))).unwrap();

    let out = Command::new(BIN)
        .args(["vector", "1"])
        .current_dir(dir.path())
        .env("SYMPTOM_BRIDGE_MODEL", &custom)
        .output()
        .expect("spawn symptom-bridge");
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "0\n");
}

#[test]
fn e2e_registry_listing() {
    let dir = deployment(None);
    let out = run(dir.path(), &["registry", "symptoms"]);
    assert!(out.status.success());
    let value: Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["symptoms"].as_array().unwrap().len(), 50);
    assert_eq!(value["symptoms"][18], "headache");

    let out = run(dir.path(), &["registry", "diseases"]);
    let value: Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["diseases"]["11"], "Migraine");
}

#[test]
fn e2e_usage_error_is_not_a_prediction_error() {
    let dir = deployment(None);
    let out = run(dir.path(), &["symptoms"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stdout(&out).is_empty());
}
