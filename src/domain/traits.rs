// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two capabilities every prediction pipeline is built from:
//
//   CategoryEncoder — label → numeric code, failing on unknown
//                     labels instead of producing garbage
//
//   Classifier      — feature vector → binary label
//
// Programming against these traits lets the application layer
// run against mock encoders/classifiers in tests, and lets
// the real implementations come from loaded artifacts.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::error::{PredictError, ValidationError};
use crate::domain::features::FeatureVector;
use crate::domain::prediction::BinaryLabel;

// ─── CategoryEncoder ──────────────────────────────────────────────────────────
/// A fixed mapping from category label to numeric code,
/// established at training time.
///
/// Implementations:
///   - LabelEncoder       → classes loaded from an artifact
///   - TypedLabelEncoder  → LabelEncoder verified against a typed enum
pub trait CategoryEncoder: Send + Sync {
    /// Form field this encoder belongs to
    fn field(&self) -> &str;

    /// Every label the encoder knows, in code order
    fn classes(&self) -> &[String];

    /// Encode a label. Unknown labels fail with InvalidCategory.
    fn encode(&self, label: &str) -> Result<f64, ValidationError>;
}

// ─── Classifier ───────────────────────────────────────────────────────────────
/// Output of one classifier call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label:       BinaryLabel,
    pub score:       f64,
    pub probability: Option<f64>,
}

/// A trained binary classifier treated as an opaque box.
///
/// Implementations:
///   - LoadedModel → linear / logistic / kernel SVC loaded from JSON
pub trait Classifier: Send + Sync {
    /// Number of features the classifier was trained on
    fn n_features(&self) -> usize;

    /// Classify one fully encoded vector.
    fn classify(&self, features: &FeatureVector) -> Result<Classification, PredictError>;
}
