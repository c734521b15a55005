// ============================================================
// Layer 3 — Feature Schema and Feature Vector
// ============================================================
// A model consumes a fixed-length, fixed-order vector of f64.
// The position → meaning mapping was decided at training time;
// if we build the vector in a different order the model still
// returns a label, just a meaningless one.
//
// To make that failure loud instead of silent:
//   - FeatureSchema names every slot in order
//   - FeatureVectorBuilder only accepts the NEXT expected name
//   - finish() refuses a vector with missing slots
//
// The same schema is compared against the model artifact's own
// feature list at load time (see ml::model).
//
// Reference: Rust Book §8 (Vectors), §9 (Error Handling)

use crate::domain::error::PredictError;

/// Ordered feature names for one model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSchema {
    names: &'static [&'static str],
}

impl FeatureSchema {
    pub const fn new(names: &'static [&'static str]) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// True if `other` lists exactly the same names in the same order
    pub fn matches<S: AsRef<str>>(&self, other: &[S]) -> bool {
        self.names.len() == other.len()
            && self.names.iter().zip(other).all(|(a, b)| *a == b.as_ref())
    }

    pub fn builder(&self) -> FeatureVectorBuilder {
        FeatureVectorBuilder {
            schema: *self,
            values: Vec::with_capacity(self.names.len()),
        }
    }
}

/// The encoded input for one prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    schema: FeatureSchema,
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn schema(&self) -> FeatureSchema {
        self.schema
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Look up one slot by feature name (mostly for logging and tests)
    pub fn get(&self, name: &str) -> Option<f64> {
        self.schema
            .names
            .iter()
            .position(|n| *n == name)
            .map(|i| self.values[i])
    }
}

/// Builds a FeatureVector slot by slot, in schema order.
#[derive(Debug)]
pub struct FeatureVectorBuilder {
    schema: FeatureSchema,
    values: Vec<f64>,
}

impl FeatureVectorBuilder {
    /// Append the value for `name`. Fails if `name` is not the
    /// next slot the schema expects.
    pub fn push(mut self, name: &str, value: f64) -> Result<Self, PredictError> {
        let idx = self.values.len();
        match self.schema.names.get(idx) {
            Some(expected) if *expected == name => {
                self.values.push(value);
                Ok(self)
            }
            Some(expected) => Err(PredictError::unexpected(format!(
                "feature '{name}' pushed at position {idx}, schema expects '{expected}'"
            ))),
            None => Err(PredictError::unexpected(format!(
                "feature '{name}' pushed past the end of a {}-feature schema",
                self.schema.len()
            ))),
        }
    }

    /// Append several consecutive slots (e.g. a one-hot group).
    pub fn extend(mut self, names: &[&str], values: &[f64]) -> Result<Self, PredictError> {
        if names.len() != values.len() {
            return Err(PredictError::unexpected(format!(
                "{} feature names but {} values",
                names.len(),
                values.len()
            )));
        }
        for (name, value) in names.iter().zip(values) {
            self = self.push(name, *value)?;
        }
        Ok(self)
    }

    pub fn finish(self) -> Result<FeatureVector, PredictError> {
        if self.values.len() != self.schema.len() {
            return Err(PredictError::unexpected(format!(
                "feature vector has {} of {} values",
                self.values.len(),
                self.schema.len()
            )));
        }
        Ok(FeatureVector { schema: self.schema, values: self.values })
    }
}
