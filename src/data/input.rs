// ============================================================
// Layer 4 — Input Parser
// ============================================================
// Turns raw command-line text into typed input, before anything
// else happens. Two shapes are accepted:
//
//   symptom mode     one argument holding a JSON array of
//                    symptom names, e.g. '["headache","nausea"]'
//
//   raw-vector mode  one or more arguments, each a decimal or a
//                    comma-separated run of decimals:
//                      1.0 2.5 3.3   ≡   1.0,2.5,3.3
//
// Anything malformed is an InputParseError. Parsing never
// touches the classifier artifact.
//
// Reference: Rust Book §9 (Recoverable Errors with Result)
//            serde_json documentation

use crate::domain::error::BridgeError;
use crate::domain::feature_vector::FeatureVector;

/// Parse the symptom-mode argument into a list of symptom names.
pub fn parse_symptom_list(arg: &str) -> Result<Vec<String>, BridgeError> {
    serde_json::from_str::<Vec<String>>(arg).map_err(|e| {
        BridgeError::InputParse(format!("expected a JSON array of symptom names: {e}"))
    })
}

/// Parse raw-vector arguments into a feature vector, in argument order.
pub fn parse_feature_args<S: AsRef<str>>(args: &[S]) -> Result<FeatureVector, BridgeError> {
    let mut values = Vec::new();

    for arg in args {
        for token in arg.as_ref().split(',') {
            values.push(parse_feature(token, values.len())?);
        }
    }

    if values.is_empty() {
        return Err(BridgeError::InputParse("feature vector is empty".into()));
    }

    Ok(FeatureVector::new(values))
}

/// Parse one decimal token. `position` is only used in the message.
fn parse_feature(token: &str, position: usize) -> Result<f64, BridgeError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(BridgeError::InputParse(format!(
            "feature {position} is empty"
        )));
    }

    let value: f64 = token.parse().map_err(|_| {
        BridgeError::InputParse(format!("feature {position} ('{token}') is not a decimal number"))
    })?;

    // "NaN" and "inf" parse as f64 but no classifier can score them
    if !value.is_finite() {
        return Err(BridgeError::InputParse(format!(
            "feature {position} ('{token}') is not finite"
        )));
    }

    Ok(value)
}
