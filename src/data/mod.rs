// ============================================================
// Layer 4 — Feature Encoding Pipeline
// ============================================================
// Everything between a raw form submission and the numeric
// vector a classifier consumes:
//
//   form fields (strings)
//       │
//       ▼
//   FormFields        → required / float / integer accessors
//       │
//       ▼
//   StrokeInput /     → typed, validated input
//   DepressionInput
//       │
//       ▼
//   LookupTable +     → numeric codes per field
//   LabelEncoder
//       │
//       ▼
//   FeatureVector     → fixed-order vector checked against the schema
//
// Reference: Rust Book §8 (Collections), §13 (Iterators)

/// Typed accessors over submitted form fields
pub mod form;

/// Hardcoded label → code tables
pub mod lookup;

/// Label encoders loaded from artifacts
pub mod label_encoder;

/// Stroke form → 9-feature vector
pub mod stroke;

/// Depression form → 5-feature vector
pub mod depression;
