// ============================================================
// Layer 2 — Stroke Use Case
// ============================================================
// Artifacts (artifacts dir):
//   stroke-model.json     — classifier over the 9-slot vector
//   smoking-encoder.json  — smoking_status label encoder
//
// Flow per request:
//   1. FormFields → StrokeInput        (ValidationError on bad input)
//   2. StrokeInput → FeatureVector     (pure)
//   3. FeatureVector → Prediction      (one classifier call)

use crate::application::{AppKind, ArtifactSummary, FieldSpec, FormPredictor};
use crate::data::form::FormFields;
use crate::data::label_encoder::ClassCoverage;
use crate::data::stroke::{StrokeEncoder, StrokeInput, RESIDENCE_FIELD_NAMES, STROKE_SCHEMA};
use crate::domain::category::{Category, Gender, ResidenceType, SmokingStatus, YesNo};
use crate::domain::error::{PredictError, StartupError};
use crate::domain::prediction::{OutcomeMessages, Prediction};
use crate::domain::traits::CategoryEncoder;
use crate::infra::artifact_store::ArtifactStore;
use crate::ml::predictor::Predictor;

pub const MODEL_FILE: &str = "stroke-model.json";
pub const SMOKING_ENCODER_FILE: &str = "smoking-encoder.json";

pub const MESSAGES: OutcomeMessages = OutcomeMessages {
    positive: "person is having stroke",
    negative: "person is not having stroke",
};

#[derive(Debug)]
pub struct StrokeUseCase {
    encoder:   StrokeEncoder,
    predictor: Predictor,
    estimator: &'static str,
}

impl StrokeUseCase {
    pub fn load(store: &ArtifactStore) -> Result<Self, StartupError> {
        let smoking = store.load_typed_encoder::<SmokingStatus>(
            SMOKING_ENCODER_FILE,
            ClassCoverage::Exact,
        )?;
        let model     = store.load_model(MODEL_FILE, STROKE_SCHEMA)?;
        let estimator = model.estimator().kind();

        Ok(Self {
            encoder:   StrokeEncoder::new(smoking),
            predictor: Predictor::new(Box::new(model), MESSAGES),
            estimator,
        })
    }

    /// Assemble around an arbitrary classifier.
    #[cfg(test)]
    pub fn from_parts(encoder: StrokeEncoder, classifier: Box<dyn crate::domain::traits::Classifier>) -> Self {
        Self {
            encoder,
            predictor: Predictor::new(classifier, MESSAGES),
            estimator: "custom",
        }
    }
}

impl FormPredictor for StrokeUseCase {
    fn kind(&self) -> AppKind {
        AppKind::Stroke
    }

    fn title(&self) -> &'static str {
        "Stroke Prediction"
    }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::select("gender", "Gender", Gender::labels()),
            FieldSpec::number("age", "Age", "0.01"),
            FieldSpec::select("hypertension", "Hypertension", YesNo::labels()),
            FieldSpec::select("heart_disease", "Heart disease", YesNo::labels()),
            FieldSpec::number("avg_glucose_level", "Average glucose level", "0.01"),
            FieldSpec::number("bmi", "BMI", "0.01"),
            FieldSpec::select("smoking_status", "Smoking status", SmokingStatus::labels()),
            FieldSpec::select("residence_type", "Residence type", ResidenceType::labels())
                .with_aliases(RESIDENCE_FIELD_NAMES),
        ]
    }

    fn predict(&self, form: &FormFields) -> Result<Prediction, PredictError> {
        let input = StrokeInput::from_form(form)?;
        tracing::debug!(?input, "stroke input validated");

        let features   = self.encoder.encode(&input)?;
        let prediction = self.predictor.predict(&features)?;

        tracing::info!("stroke prediction: {}", prediction.message);
        Ok(prediction)
    }

    fn summary(&self) -> ArtifactSummary {
        let smoking = self.encoder.smoking_encoder();
        ArtifactSummary {
            estimator: self.estimator,
            features:  STROKE_SCHEMA.names(),
            encoders:  vec![(smoking.field().to_string(), smoking.classes().to_vec())],
        }
    }
}
