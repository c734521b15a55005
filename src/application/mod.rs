// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// One use case per model. Each is an immutable context object
// built ONCE at startup from the artifact store and then shared
// (behind an Arc) with every request handler:
//
//   StrokeUseCase      — stroke form → "person is (not) having stroke"
//   DepressionUseCase  — student form → "Person is (likely|not) depressed."
//
// Both implement FormPredictor, the seam the web and CLI layers
// program against. Nothing in this layer parses HTTP or argv.
//
// Rules for this layer:
//   - No model math here (that's Layer 5)
//   - No file access here (that's Layer 6)
//   - Only workflow coordination: validate → encode → predict
//
// Reference: Clean Architecture pattern
//            Rust Book §17 (Trait Objects)

use std::fmt;
use std::sync::Arc;

use crate::data::form::FormFields;
use crate::domain::error::{PredictError, StartupError};
use crate::domain::prediction::Prediction;
use crate::infra::artifact_store::ArtifactStore;

/// The stroke workflow
pub mod stroke_use_case;

/// The student-depression workflow
pub mod depression_use_case;

#[cfg(test)]
pub mod fixtures;

use depression_use_case::DepressionUseCase;
use stroke_use_case::StrokeUseCase;

/// Which model a process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppKind {
    Stroke,
    Depression,
}

impl AppKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Stroke     => "stroke",
            Self::Depression => "depression",
        }
    }
}

impl fmt::Display for AppKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How one form field is rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    /// Drop-down with a fixed set of choices
    Select(Vec<String>),
    /// Numeric input with an HTML `step`
    Number { step: &'static str },
}

/// A form field as presented to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name:  &'static str,
    pub label: &'static str,
    pub input: FieldInput,

    /// Other names the field may be submitted under
    pub aliases: &'static [&'static str],
}

impl FieldSpec {
    pub fn select<S: Into<String>>(
        name:    &'static str,
        label:   &'static str,
        choices: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name,
            label,
            input:   FieldInput::Select(choices.into_iter().map(Into::into).collect()),
            aliases: &[],
        }
    }

    pub fn number(name: &'static str, label: &'static str, step: &'static str) -> Self {
        Self { name, label, input: FieldInput::Number { step }, aliases: &[] }
    }

    pub fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// The submitted value, under the canonical name or any alias
    pub fn value_in<'a>(&self, form: &'a FormFields) -> Option<&'a str> {
        form.get(self.name).or_else(|| form.get_any(self.aliases))
    }
}

/// What `check` prints about a loaded use case.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactSummary {
    pub estimator: &'static str,
    pub features:  &'static [&'static str],
    pub encoders:  Vec<(String, Vec<String>)>,
}

/// A loaded model together with its form: the seam between the
/// presentation layers and the prediction pipeline.
pub trait FormPredictor: Send + Sync {
    fn kind(&self) -> AppKind;

    /// Page heading
    fn title(&self) -> &'static str;

    /// Fields in display order
    fn fields(&self) -> Vec<FieldSpec>;

    /// Values the blank form is pre-filled with
    fn defaults(&self) -> FormFields {
        FormFields::default()
    }

    /// Validate, encode and classify one submission.
    /// Validation completes before the classifier is called.
    fn predict(&self, form: &FormFields) -> Result<Prediction, PredictError>;

    fn summary(&self) -> ArtifactSummary;
}

/// Load every artifact `kind` needs. Any failure is fatal.
pub fn load(kind: AppKind, store: &ArtifactStore) -> Result<Arc<dyn FormPredictor>, StartupError> {
    tracing::info!("Loading {} artifacts from '{}'", kind, store.dir().display());
    let predictor: Arc<dyn FormPredictor> = match kind {
        AppKind::Stroke     => Arc::new(StrokeUseCase::load(store)?),
        AppKind::Depression => Arc::new(DepressionUseCase::load(store)?),
    };
    Ok(predictor)
}
