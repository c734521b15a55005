// ============================================================
// Layer 5 — Classifier Artifacts
// ============================================================
// Trained models arrive as JSON produced by the external
// training pipeline. Training is not done here; we only
// evaluate the decision function the pipeline exported.
//
// Artifact layout:
//   {
//     "features":  ["gender", "age", ...],     ← the vector contract
//     "estimator": { "type": "svc", ... }
//   }
//
// Supported estimators (binary, label 1 iff decision > 0):
//
//   linear    f(x) = w·x + b
//   logistic  f(x) = w·x + b,  P(1) = 1 / (1 + e^-f)
//   svc       f(x) = Σ αᵢ K(svᵢ, x) + b
//
//   kernels:  linear   K = u·v
//             rbf      K = exp(-γ‖u - v‖²)
//             poly     K = (γ u·v + c₀)^d
//             sigmoid  K = tanh(γ u·v + c₀)
//
// All dimensions are checked when the artifact is loaded, and
// `features` must equal the schema the app encodes with.

use serde::Deserialize;

use crate::domain::error::PredictError;
use crate::domain::features::{FeatureSchema, FeatureVector};
use crate::domain::prediction::BinaryLabel;
use crate::domain::traits::{Classification, Classifier};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Kernel {
    Linear,
    Rbf { gamma: f64 },
    Poly { gamma: f64, coef0: f64, degree: u32 },
    Sigmoid { gamma: f64, coef0: f64 },
}

impl Kernel {
    fn eval(&self, u: &[f64], v: &[f64]) -> f64 {
        match self {
            Self::Linear => dot(u, v),
            Self::Rbf { gamma } => {
                let sq: f64 = u.iter().zip(v).map(|(a, b)| (a - b) * (a - b)).sum();
                (-gamma * sq).exp()
            }
            // degree fits in i32, checked at load
            Self::Poly { gamma, coef0, degree } => {
                (gamma * dot(u, v) + coef0).powi(*degree as i32)
            }
            Self::Sigmoid { gamma, coef0 } => (gamma * dot(u, v) + coef0).tanh(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Estimator {
    Linear {
        coef:      Vec<f64>,
        intercept: f64,
    },
    Logistic {
        coef:      Vec<f64>,
        intercept: f64,
    },
    Svc {
        kernel:          Kernel,
        support_vectors: Vec<Vec<f64>>,
        dual_coef:       Vec<f64>,
        intercept:       f64,
    },
}

impl Estimator {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Linear { .. }   => "linear",
            Self::Logistic { .. } => "logistic",
            Self::Svc { .. }      => "svc",
        }
    }

    fn decision(&self, x: &[f64]) -> f64 {
        match self {
            Self::Linear { coef, intercept } | Self::Logistic { coef, intercept } => {
                dot(coef, x) + intercept
            }
            Self::Svc { kernel, support_vectors, dual_coef, intercept } => {
                support_vectors
                    .iter()
                    .zip(dual_coef)
                    .map(|(sv, alpha)| alpha * kernel.eval(sv, x))
                    .sum::<f64>()
                    + intercept
            }
        }
    }

    /// Dimension errors, if any, for an `n`-feature contract.
    fn check_dims(&self, n: usize) -> Result<(), String> {
        match self {
            Self::Linear { coef, .. } | Self::Logistic { coef, .. } => {
                if coef.len() != n {
                    return Err(format!("coef has {} entries, features has {n}", coef.len()));
                }
            }
            Self::Svc { kernel, support_vectors, dual_coef, .. } => {
                if let Kernel::Poly { degree, .. } = kernel {
                    if i32::try_from(*degree).is_err() {
                        return Err(format!("poly kernel degree {degree} is out of range"));
                    }
                }
                if support_vectors.is_empty() {
                    return Err("svc has no support vectors".to_string());
                }
                if support_vectors.len() != dual_coef.len() {
                    return Err(format!(
                        "{} support vectors but {} dual coefficients",
                        support_vectors.len(),
                        dual_coef.len()
                    ));
                }
                if let Some((i, sv)) = support_vectors.iter().enumerate().find(|(_, sv)| sv.len() != n) {
                    return Err(format!(
                        "support vector {i} has {} entries, features has {n}",
                        sv.len()
                    ));
                }
            }
        }
        Ok(())
    }
}

/// On-disk shape of a model artifact.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelArtifact {
    /// Feature names in training order
    pub features: Vec<String>,
    pub estimator: Estimator,
}

/// A model artifact that passed load-time validation.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedModel {
    schema:    FeatureSchema,
    estimator: Estimator,
}

impl LoadedModel {
    /// Check the artifact against the schema the app will encode with.
    /// Returns the reason on failure so the caller can attach the path.
    pub fn from_artifact(schema: FeatureSchema, artifact: ModelArtifact) -> Result<Self, String> {
        if !schema.matches(&artifact.features) {
            return Err(format!(
                "model features [{}] do not match encoder order [{}]",
                artifact.features.join(", "),
                schema.names().join(", ")
            ));
        }
        artifact.estimator.check_dims(schema.len())?;
        Ok(Self { schema, estimator: artifact.estimator })
    }

    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }
}

impl Classifier for LoadedModel {
    fn n_features(&self) -> usize {
        self.schema.len()
    }

    fn classify(&self, features: &FeatureVector) -> Result<Classification, PredictError> {
        if features.schema() != self.schema {
            return Err(PredictError::unexpected(format!(
                "vector built for [{}], model expects [{}]",
                features.schema().names().join(", "),
                self.schema.names().join(", ")
            )));
        }

        let score = self.estimator.decision(features.values());
        if !score.is_finite() {
            return Err(PredictError::unexpected(format!(
                "{} decision function returned {score}",
                self.estimator.kind()
            )));
        }

        let label = if score > 0.0 { BinaryLabel::Positive } else { BinaryLabel::Negative };
        let probability = match self.estimator {
            Estimator::Logistic { .. } => Some(1.0 / (1.0 + (-score).exp())),
            _ => None,
        };
        Ok(Classification { label, score, probability })
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: FeatureSchema = FeatureSchema::new(&["x", "y"]);
    const OTHER:  FeatureSchema = FeatureSchema::new(&["y", "x"]);

    fn features(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn linear(coef: Vec<f64>, intercept: f64) -> ModelArtifact {
        ModelArtifact { features: features(&["x", "y"]), estimator: Estimator::Linear { coef, intercept } }
    }

    fn vector(schema: FeatureSchema, x: f64, y: f64) -> FeatureVector {
        let names = schema.names();
        schema.builder().push(names[0], x).unwrap().push(names[1], y).unwrap().finish().unwrap()
    }

    #[test]
    fn test_linear_decision_sign() {
        let m = LoadedModel::from_artifact(SCHEMA, linear(vec![1.0, -1.0], 0.0)).unwrap();
        assert_eq!(m.classify(&vector(SCHEMA, 2.0, 1.0)).unwrap().label, BinaryLabel::Positive);
        assert_eq!(m.classify(&vector(SCHEMA, 1.0, 2.0)).unwrap().label, BinaryLabel::Negative);
        // exactly on the boundary is the negative class
        assert_eq!(m.classify(&vector(SCHEMA, 1.0, 1.0)).unwrap().label, BinaryLabel::Negative);
    }

    #[test]
    fn test_logistic_reports_probability() {
        let art = ModelArtifact {
            features:  features(&["x", "y"]),
            estimator: Estimator::Logistic { coef: vec![0.0, 0.0], intercept: 0.0 },
        };
        let m = LoadedModel::from_artifact(SCHEMA, art).unwrap();
        let c = m.classify(&vector(SCHEMA, 3.0, 4.0)).unwrap();
        assert_eq!(c.probability, Some(0.5));
        assert_eq!(c.label, BinaryLabel::Negative);
    }

    #[test]
    fn test_rbf_svc_decision() {
        // One positive support vector at the origin, one negative far away.
        let art = ModelArtifact {
            features:  features(&["x", "y"]),
            estimator: Estimator::Svc {
                kernel:          Kernel::Rbf { gamma: 0.5 },
                support_vectors: vec![vec![0.0, 0.0], vec![10.0, 10.0]],
                dual_coef:       vec![1.0, -1.0],
                intercept:       0.0,
            },
        };
        let m = LoadedModel::from_artifact(SCHEMA, art).unwrap();
        assert_eq!(m.classify(&vector(SCHEMA, 0.1, 0.1)).unwrap().label, BinaryLabel::Positive);
        assert_eq!(m.classify(&vector(SCHEMA, 9.9, 9.9)).unwrap().label, BinaryLabel::Negative);
    }

    #[test]
    fn test_kernels() {
        let u = [1.0, 2.0];
        let v = [3.0, 4.0];
        assert_eq!(Kernel::Linear.eval(&u, &v), 11.0);
        assert_eq!(Kernel::Poly { gamma: 1.0, coef0: 1.0, degree: 2 }.eval(&u, &v), 144.0);
        assert_eq!(Kernel::Rbf { gamma: 1.0 }.eval(&u, &u), 1.0);
        assert_eq!(Kernel::Sigmoid { gamma: 0.0, coef0: 0.0 }.eval(&u, &v), 0.0);
    }

    #[test]
    fn test_rejects_feature_order_mismatch() {
        let err = LoadedModel::from_artifact(OTHER, linear(vec![1.0, 1.0], 0.0)).unwrap_err();
        assert!(err.contains("do not match"));
    }

    #[test]
    fn test_rejects_dimension_mismatch() {
        assert!(LoadedModel::from_artifact(SCHEMA, linear(vec![1.0], 0.0)).is_err());

        let art = ModelArtifact {
            features:  features(&["x", "y"]),
            estimator: Estimator::Svc {
                kernel:          Kernel::Linear,
                support_vectors: vec![vec![0.0, 0.0], vec![1.0]],
                dual_coef:       vec![1.0, 1.0],
                intercept:       0.0,
            },
        };
        let err = LoadedModel::from_artifact(SCHEMA, art).unwrap_err();
        assert!(err.contains("support vector 1"));
    }

    #[test]
    fn test_rejects_out_of_range_poly_degree() {
        let json = r#"{
            "features": ["x", "y"],
            "estimator": {
                "type": "svc",
                "kernel": { "type": "poly", "gamma": 1.0, "coef0": 0.0, "degree": 4294967295 },
                "support_vectors": [[1.0, 2.0]],
                "dual_coef": [1.0],
                "intercept": 0.0
            }
        }"#;
        let art: ModelArtifact = serde_json::from_str(json).unwrap();
        let err = LoadedModel::from_artifact(SCHEMA, art).unwrap_err();
        assert!(err.contains("degree 4294967295"));
    }

    #[test]
    fn test_vector_from_other_schema_is_unexpected_error() {
        let m   = LoadedModel::from_artifact(SCHEMA, linear(vec![1.0, 1.0], 0.0)).unwrap();
        let err = m.classify(&vector(OTHER, 1.0, 1.0)).unwrap_err();
        assert!(!err.is_validation());
    }

    #[test]
    fn test_artifact_json_shape() {
        let json = r#"{
            "features": ["x", "y"],
            "estimator": {
                "type": "svc",
                "kernel": { "type": "rbf", "gamma": 0.1 },
                "support_vectors": [[1.0, 2.0]],
                "dual_coef": [0.5],
                "intercept": -0.2
            }
        }"#;
        let art: ModelArtifact = serde_json::from_str(json).unwrap();
        assert_eq!(art.estimator.kind(), "svc");
        assert!(LoadedModel::from_artifact(SCHEMA, art).is_ok());
    }
}
