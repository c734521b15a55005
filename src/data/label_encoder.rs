// ============================================================
// Layer 4 — Label Encoders
// ============================================================
// A label encoder is the category → integer mapping fitted at
// training time and shipped as an artifact. The convention is
// simple: the code of a label is its index in `classes`.
//
// Example artifact (smoking-encoder.json):
//   {
//     "field":   "smoking_status",
//     "classes": ["Unknown", "formerly smoked", "never smoked", "smokes"]
//   }
//   → "never smoked" encodes to 2.0
//
// Two encoders are provided:
//
//   LabelEncoder          — open class set (e.g. degree names);
//                           validates the label against `classes`
//
//   TypedLabelEncoder<C>  — class set checked at LOAD time against
//                           a typed Category enum, so encoding takes
//                           a typed value and the lookup table is
//                           built once up front
//
// Reference: Rust Book §8 (Vectors), §10 (Generics, Traits)

use std::collections::HashSet;

use serde::Deserialize;

use crate::domain::category::Category;
use crate::domain::error::{PredictError, ValidationError};
use crate::domain::traits::CategoryEncoder;

/// On-disk shape of an encoder artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct EncoderArtifact {
    /// Optional field name recorded by the training pipeline
    #[serde(default)]
    pub field: Option<String>,

    /// Known labels, in code order
    pub classes: Vec<String>,
}

/// How strictly a typed encoder's classes must match the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassCoverage {
    /// Artifact classes must equal the enum's label set
    Exact,
    /// Artifact classes must be a subset of the enum's labels
    Subset,
}

/// Category encoder with an open class set loaded from an artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelEncoder {
    field:   String,
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Validate an artifact for `field`. Returns the reason on failure
    /// so the caller can attach the artifact path.
    pub fn from_artifact(field: &str, artifact: EncoderArtifact) -> Result<Self, String> {
        if let Some(recorded) = &artifact.field {
            if recorded != field {
                return Err(format!(
                    "encoder was fitted on field '{recorded}', expected '{field}'"
                ));
            }
        }
        if artifact.classes.is_empty() {
            return Err("encoder has no classes".to_string());
        }
        let mut seen = HashSet::new();
        for class in &artifact.classes {
            if !seen.insert(class.as_str()) {
                return Err(format!("duplicate class '{class}'"));
            }
        }
        Ok(Self { field: field.to_string(), classes: artifact.classes })
    }

    pub fn new(field: &str, classes: &[&str]) -> Result<Self, String> {
        Self::from_artifact(field, EncoderArtifact {
            field:   None,
            classes: classes.iter().map(|c| c.to_string()).collect(),
        })
    }
}

impl CategoryEncoder for LabelEncoder {
    fn field(&self) -> &str {
        &self.field
    }

    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn encode(&self, label: &str) -> Result<f64, ValidationError> {
        self.classes
            .iter()
            .position(|c| c == label)
            .map(|i| i as f64)
            .ok_or_else(|| {
                ValidationError::invalid_category(&self.field, label, self.classes.iter().cloned())
            })
    }
}

/// A LabelEncoder whose classes have been checked against `C`.
#[derive(Debug, Clone)]
pub struct TypedLabelEncoder<C: Category> {
    inner: LabelEncoder,
    codes: Vec<(C, f64)>,
}

impl<C: Category> TypedLabelEncoder<C> {
    pub fn from_artifact(artifact: EncoderArtifact, coverage: ClassCoverage) -> Result<Self, String> {
        let inner = LabelEncoder::from_artifact(C::FIELD, artifact)?;

        let mut codes = Vec::with_capacity(inner.classes.len());
        for (idx, class) in inner.classes.iter().enumerate() {
            let value = C::parse(class).map_err(|_| {
                format!(
                    "class '{class}' is not a known {} label (expected one of: {})",
                    C::FIELD,
                    C::labels().join(", ")
                )
            })?;
            codes.push((value, idx as f64));
        }

        if coverage == ClassCoverage::Exact {
            let missing: Vec<&str> = C::ALL
                .iter()
                .filter(|c| !codes.iter().any(|(v, _)| v == *c))
                .map(|c| c.label())
                .collect();
            if !missing.is_empty() {
                return Err(format!("encoder is missing classes: {}", missing.join(", ")));
            }
        }

        Ok(Self { inner, codes })
    }

    /// Typed values this encoder accepts, in code order
    pub fn variants(&self) -> impl Iterator<Item = C> + '_ {
        self.codes.iter().map(|(c, _)| *c)
    }

    /// Encode an already-parsed value. A Subset encoder may not know
    /// every variant; that is reported as a validation error.
    pub fn encode_typed(&self, value: C) -> Result<f64, PredictError> {
        self.codes
            .iter()
            .find(|(c, _)| *c == value)
            .map(|(_, code)| *code)
            .ok_or_else(|| {
                ValidationError::invalid_category(
                    C::FIELD,
                    value.label(),
                    self.inner.classes.iter().cloned(),
                )
                .into()
            })
    }
}

impl<C: Category> CategoryEncoder for TypedLabelEncoder<C> {
    fn field(&self) -> &str {
        self.inner.field()
    }

    fn classes(&self) -> &[String] {
        self.inner.classes()
    }

    fn encode(&self, label: &str) -> Result<f64, ValidationError> {
        self.inner.encode(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::{Gender, SmokingStatus};

    fn artifact(classes: &[&str]) -> EncoderArtifact {
        EncoderArtifact {
            field:   None,
            classes: classes.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_code_is_class_index() {
        let enc = LabelEncoder::new("degree", &["B.Sc", "B.Tech", "PhD"]).unwrap();
        assert_eq!(enc.encode("B.Sc"), Ok(0.0));
        assert_eq!(enc.encode("PhD"), Ok(2.0));
    }

    #[test]
    fn test_every_known_class_encodes_within_range() {
        let enc = LabelEncoder::new("degree", &["BA", "BCA", "MD", "MSc", "PhD"]).unwrap();
        for class in enc.classes() {
            let code = enc.encode(class).unwrap();
            assert!(code >= 0.0 && code < enc.classes().len() as f64);
        }
    }

    #[test]
    fn test_unknown_class_lists_allowed() {
        let enc = LabelEncoder::new("degree", &["BA", "PhD"]).unwrap();
        let err = enc.encode("Wizard").unwrap_err();
        assert_eq!(err.to_string(), "Invalid degree! Choose from: [BA, PhD]");
    }

    #[test]
    fn test_rejects_empty_and_duplicate_classes() {
        assert!(LabelEncoder::new("degree", &[]).is_err());
        assert!(LabelEncoder::new("degree", &["BA", "BA"]).is_err());
    }

    #[test]
    fn test_rejects_mismatched_field() {
        let art = EncoderArtifact { field: Some("gender".into()), classes: vec!["BA".into()] };
        let err = LabelEncoder::from_artifact("degree", art).unwrap_err();
        assert!(err.contains("'gender'"));
    }

    #[test]
    fn test_typed_exact_requires_full_class_set() {
        let err = TypedLabelEncoder::<SmokingStatus>::from_artifact(
            artifact(&["never smoked", "smokes"]),
            ClassCoverage::Exact,
        )
        .unwrap_err();
        assert!(err.contains("formerly smoked"));
    }

    #[test]
    fn test_typed_rejects_foreign_class() {
        let err = TypedLabelEncoder::<SmokingStatus>::from_artifact(
            artifact(&["Unknown", "formerly smoked", "never smoked", "smokes", "vapes"]),
            ClassCoverage::Exact,
        )
        .unwrap_err();
        assert!(err.contains("'vapes'"));
    }

    #[test]
    fn test_typed_encodes_by_artifact_order() {
        let enc = TypedLabelEncoder::<SmokingStatus>::from_artifact(
            artifact(&["Unknown", "formerly smoked", "never smoked", "smokes"]),
            ClassCoverage::Exact,
        )
        .unwrap();
        assert_eq!(enc.encode_typed(SmokingStatus::Unknown).unwrap(), 0.0);
        assert_eq!(enc.encode_typed(SmokingStatus::FormerlySmoked).unwrap(), 1.0);
        assert_eq!(enc.encode_typed(SmokingStatus::Smokes).unwrap(), 3.0);
    }

    #[test]
    fn test_typed_encoder_is_shareable_across_handlers() {
        fn shared(enc: Box<dyn CategoryEncoder>) -> std::sync::Arc<dyn CategoryEncoder> {
            enc.into()
        }
        let enc = TypedLabelEncoder::<Gender>::from_artifact(
            artifact(&["Female", "Male", "Other"]),
            ClassCoverage::Exact,
        )
        .unwrap();
        let enc = shared(Box::new(enc));
        let handle = {
            let enc = enc.clone();
            std::thread::spawn(move || enc.encode("Other"))
        };
        assert_eq!(handle.join().unwrap(), Ok(2.0));
        assert_eq!(enc.field(), "gender");
    }

    #[test]
    fn test_typed_subset_rejects_unfitted_variant() {
        let enc = TypedLabelEncoder::<Gender>::from_artifact(
            artifact(&["Female", "Male"]),
            ClassCoverage::Subset,
        )
        .unwrap();
        assert_eq!(enc.variants().collect::<Vec<_>>(), vec![Gender::Female, Gender::Male]);
        let err = enc.encode_typed(Gender::Other).unwrap_err();
        assert!(err.is_validation());
    }
}
