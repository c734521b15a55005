// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Three kinds of failure exist in this system:
//
//   StartupError    — an artifact is missing, corrupt, or does
//                     not fit the model contract. Fatal: the
//                     server never binds its listener.
//
//   ValidationError — the user submitted something we cannot
//                     encode (unknown category, bad number,
//                     missing field). Shown inline on the form.
//
//   PredictError    — wraps ValidationError, plus Unexpected
//                     for anything that goes wrong inside the
//                     encoder/classifier after validation.
//
// Reference: thiserror crate documentation
//            Rust Book §9 (Recoverable Errors with Result)

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while loading artifacts at process start.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The artifact file does not exist (or cannot be opened).
    #[error("artifact not found: '{}'", .path.display())]
    ArtifactNotFound { path: PathBuf },

    /// The file exists but could not be read or parsed.
    #[error("corrupt artifact '{}': {reason}", .path.display())]
    CorruptArtifact { path: PathBuf, reason: String },

    /// The file parsed, but its contents break the model contract
    /// (wrong feature order, dimension mismatch, unknown classes).
    #[error("incompatible artifact '{}': {reason}", .path.display())]
    IncompatibleArtifact { path: PathBuf, reason: String },
}

impl StartupError {
    pub fn incompatible(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::IncompatibleArtifact { path: path.into(), reason: reason.into() }
    }
}

/// Recoverable, user-facing input errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid {field}! Choose from: [{}]", .allowed.join(", "))]
    InvalidCategory {
        field:   String,
        value:   String,
        allowed: Vec<String>,
    },

    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumber { field: String, value: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },
}

impl ValidationError {
    pub fn invalid_category(
        field:   impl Into<String>,
        value:   impl Into<String>,
        allowed: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::InvalidCategory {
            field:   field.into(),
            value:   value.into(),
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    pub fn invalid_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumber { field: field.into(), value: value.into() }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField { field: field.into() }
    }

    /// The form field this error refers to
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidCategory { field, .. }
            | Self::InvalidNumber { field, .. }
            | Self::MissingField { field } => field,
        }
    }
}

/// Everything that can go wrong while serving one prediction.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("unexpected prediction failure: {0}")]
    Unexpected(String),
}

impl PredictError {
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
