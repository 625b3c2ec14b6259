// ============================================================
// Layer 5 — Estimators
// ============================================================
// Concrete classifiers that can be restored from an artifact.
// Each one is built from its deserialized parameters by a
// validating constructor, so a model that exists is one that
// can predict; shape problems surface at load time, not at
// prediction time.
//
//   LinearClassifier   one-vs-rest linear decision function,
//                      the form a linear SVC exports:
//                        score_k = coef_k · x + intercept_k
//                        class   = classes[argmax_k score_k]
//                      With two classes and a single coef row
//                      the sign of the score picks the class.
//
//   NearestCentroid    class of the closest centroid
//                      (squared Euclidean distance)
//
//   ConstantClassifier always the same class; used for smoke
//                      deployments and tests
//
// Reference: scikit-learn LinearSVC / NearestCentroid / DummyClassifier
//            Rust Book §10 (Traits)

use anyhow::{bail, ensure, Result};
use serde::Deserialize;

use crate::domain::error::ModelError;
use crate::domain::feature_vector::FeatureVector;
use crate::domain::traits::Classifier;

/// Check every row against the trained width before scoring.
fn check_batch(batch: &[FeatureVector], expected: usize) -> Result<(), ModelError> {
    if batch.is_empty() {
        return Err(ModelError::EmptyBatch);
    }
    match batch.iter().find(|row| row.len() != expected) {
        Some(row) => Err(ModelError::FeatureCountMismatch { expected, actual: row.len() }),
        None      => Ok(()),
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn all_finite(rows: &[Vec<f64>]) -> bool {
    rows.iter().flatten().all(|v| v.is_finite())
}

// ─── LinearClassifier ─────────────────────────────────────────────────────────
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinearParams {
    pub classes:   Vec<usize>,
    pub coef:      Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct LinearClassifier {
    classes:    Vec<usize>,
    coef:       Vec<Vec<f64>>,
    intercept:  Vec<f64>,
    n_features: usize,
}

impl LinearClassifier {
    pub fn new(params: LinearParams) -> Result<Self> {
        let LinearParams { classes, coef, intercept } = params;

        ensure!(classes.len() >= 2, "a linear classifier needs at least 2 classes, got {}", classes.len());
        ensure!(!coef.is_empty(), "coef has no rows");

        let binary = classes.len() == 2 && coef.len() == 1;
        if !binary && coef.len() != classes.len() {
            bail!(
                "coef has {} rows but there are {} classes",
                coef.len(),
                classes.len()
            );
        }
        ensure!(
            intercept.len() == coef.len(),
            "intercept has {} entries but coef has {} rows",
            intercept.len(),
            coef.len()
        );

        let n_features = coef[0].len();
        ensure!(n_features > 0, "coef rows are empty");
        if let Some((i, row)) = coef.iter().enumerate().find(|(_, r)| r.len() != n_features) {
            bail!("coef row {i} has {} features, row 0 has {n_features}", row.len());
        }
        ensure!(
            all_finite(&coef) && intercept.iter().all(|v| v.is_finite()),
            "coef or intercept contains a non-finite value"
        );

        Ok(Self { classes, coef, intercept, n_features })
    }

    fn predict_row(&self, row: usize, x: &[f64]) -> Result<usize, ModelError> {
        let scores: Vec<f64> = self
            .coef
            .iter()
            .zip(&self.intercept)
            .map(|(w, b)| dot(w, x) + b)
            .collect();

        if scores.iter().any(|s| !s.is_finite()) {
            return Err(ModelError::NonFiniteScore { row });
        }

        if scores.len() == 1 {
            let class = if scores[0] > 0.0 { self.classes[1] } else { self.classes[0] };
            return Ok(class);
        }

        // first maximum wins on ties
        let mut best = 0;
        for (k, score) in scores.iter().enumerate().skip(1) {
            if *score > scores[best] {
                best = k;
            }
        }
        Ok(self.classes[best])
    }
}

impl Classifier for LinearClassifier {
    fn estimator(&self) -> &'static str {
        "linear"
    }

    fn n_features(&self) -> Option<usize> {
        Some(self.n_features)
    }

    fn predict(&self, batch: &[FeatureVector]) -> Result<Vec<usize>, ModelError> {
        check_batch(batch, self.n_features)?;
        batch
            .iter()
            .enumerate()
            .map(|(row, x)| self.predict_row(row, x.as_slice()))
            .collect()
    }
}

// ─── NearestCentroid ──────────────────────────────────────────────────────────
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CentroidParams {
    pub classes:   Vec<usize>,
    pub centroids: Vec<Vec<f64>>,
}

#[derive(Debug, Clone)]
pub struct NearestCentroid {
    classes:    Vec<usize>,
    centroids:  Vec<Vec<f64>>,
    n_features: usize,
}

impl NearestCentroid {
    pub fn new(params: CentroidParams) -> Result<Self> {
        let CentroidParams { classes, centroids } = params;

        ensure!(!classes.is_empty(), "no classes");
        ensure!(
            centroids.len() == classes.len(),
            "{} centroids for {} classes",
            centroids.len(),
            classes.len()
        );

        let n_features = centroids[0].len();
        ensure!(n_features > 0, "centroids are empty");
        if let Some((i, c)) = centroids.iter().enumerate().find(|(_, c)| c.len() != n_features) {
            bail!("centroid {i} has {} features, centroid 0 has {n_features}", c.len());
        }
        ensure!(all_finite(&centroids), "centroids contain a non-finite value");

        Ok(Self { classes, centroids, n_features })
    }

    fn predict_row(&self, row: usize, x: &[f64]) -> Result<usize, ModelError> {
        let mut best: Option<(usize, f64)> = None;
        for (k, centroid) in self.centroids.iter().enumerate() {
            let dist: f64 = centroid.iter().zip(x).map(|(c, v)| (c - v) * (c - v)).sum();
            if !dist.is_finite() {
                return Err(ModelError::NonFiniteScore { row });
            }
            if best.map_or(true, |(_, d)| dist < d) {
                best = Some((k, dist));
            }
        }
        // new() guarantees at least one centroid
        let (k, _) = best.ok_or(ModelError::NonFiniteScore { row })?;
        Ok(self.classes[k])
    }
}

impl Classifier for NearestCentroid {
    fn estimator(&self) -> &'static str {
        "nearest_centroid"
    }

    fn n_features(&self) -> Option<usize> {
        Some(self.n_features)
    }

    fn predict(&self, batch: &[FeatureVector]) -> Result<Vec<usize>, ModelError> {
        check_batch(batch, self.n_features)?;
        batch
            .iter()
            .enumerate()
            .map(|(row, x)| self.predict_row(row, x.as_slice()))
            .collect()
    }
}

// ─── ConstantClassifier ───────────────────────────────────────────────────────
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstantParams {
    pub class: usize,
    #[serde(default)]
    pub n_features: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct ConstantClassifier {
    class:      usize,
    n_features: Option<usize>,
}

impl ConstantClassifier {
    pub fn new(params: ConstantParams) -> Result<Self> {
        if params.n_features == Some(0) {
            bail!("n_features must be positive when given");
        }
        Ok(Self { class: params.class, n_features: params.n_features })
    }
}

impl Classifier for ConstantClassifier {
    fn estimator(&self) -> &'static str {
        "constant"
    }

    fn n_features(&self) -> Option<usize> {
        self.n_features
    }

    fn predict(&self, batch: &[FeatureVector]) -> Result<Vec<usize>, ModelError> {
        match self.n_features {
            Some(expected) => check_batch(batch, expected)?,
            None if batch.is_empty() => return Err(ModelError::EmptyBatch),
            None => {}
        }
        Ok(vec![self.class; batch.len()])
    }
}
