// ============================================================
// Layer 4 — Form Fields
// ============================================================
// Raw form submissions arrive as string key/value pairs.
// FormFields wraps them and provides typed accessors that
// fail with a ValidationError instead of panicking:
//
//   required(name) → trimmed, non-empty string or MissingField
//   float(name)    → finite f64 or InvalidNumber
//   integer(name)  → i64 or InvalidNumber
//
// "NaN" and "inf" parse as f64 in Rust; they are rejected here
// because no model was trained on non-finite inputs.
//
// Reference: Rust Book §8 (HashMap), §9 (Error Handling)

use std::collections::HashMap;

use crate::domain::error::ValidationError;

/// The key/value pairs of one form submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    values: HashMap<String, String>,
}

impl FormFields {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Build from `name=value` pairs (used by the CLI and tests).
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Raw value, trimmed; None when absent or blank
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Like `get`, but also tries each alias in turn.
    pub fn get_any(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|n| self.get(n))
    }

    pub fn required(&self, name: &str) -> Result<&str, ValidationError> {
        self.get(name).ok_or_else(|| ValidationError::missing(name))
    }

    /// Required field that may be submitted under several names.
    /// Errors are reported against the first (canonical) name.
    pub fn required_any(&self, names: &[&str]) -> Result<&str, ValidationError> {
        self.get_any(names)
            .ok_or_else(|| ValidationError::missing(names.first().copied().unwrap_or_default()))
    }

    pub fn float(&self, name: &str) -> Result<f64, ValidationError> {
        parse_float(name, self.required(name)?)
    }

    pub fn integer(&self, name: &str) -> Result<i64, ValidationError> {
        let raw = self.required(name)?;
        raw.parse::<i64>()
            .map_err(|_| ValidationError::invalid_number(name, raw))
    }
}

/// Parse a finite float, attributing failures to `field`.
pub fn parse_float(field: &str, raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::invalid_number(field, raw))
}
