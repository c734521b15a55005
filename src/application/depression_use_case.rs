// ============================================================
// Layer 2 — Depression Use Case
// ============================================================
// Artifacts (artifacts dir):
//   depression-model.json  — classifier over the 5-slot vector
//   gender-encoder.json    — gender label encoder (subset of Gender)
//   degree-encoder.json    — degree label encoder (open class set)
//
// The drop-down choices for gender and degree come from the
// loaded encoders, so the form can never offer a label the
// model was not trained on.

use crate::application::{AppKind, ArtifactSummary, FieldSpec, FormPredictor};
use crate::data::depression::{
    DepressionEncoder, DepressionInput, DEFAULT_VALUES, DEPRESSION_SCHEMA,
};
use crate::data::form::FormFields;
use crate::data::label_encoder::ClassCoverage;
use crate::domain::category::Gender;
use crate::domain::error::{PredictError, StartupError};
use crate::domain::prediction::{OutcomeMessages, Prediction};
use crate::domain::traits::CategoryEncoder;
use crate::infra::artifact_store::ArtifactStore;
use crate::ml::predictor::Predictor;

pub const MODEL_FILE: &str = "depression-model.json";
pub const GENDER_ENCODER_FILE: &str = "gender-encoder.json";
pub const DEGREE_ENCODER_FILE: &str = "degree-encoder.json";

pub const MESSAGES: OutcomeMessages = OutcomeMessages {
    positive: "Person is likely depressed.",
    negative: "Person is not depressed.",
};

#[derive(Debug)]
pub struct DepressionUseCase {
    encoder:   DepressionEncoder,
    predictor: Predictor,
    estimator: &'static str,
}

impl DepressionUseCase {
    pub fn load(store: &ArtifactStore) -> Result<Self, StartupError> {
        let gender = store.load_typed_encoder::<Gender>(GENDER_ENCODER_FILE, ClassCoverage::Subset)?;
        let degree = store.load_label_encoder(DEGREE_ENCODER_FILE, "degree")?;
        let model  = store.load_model(MODEL_FILE, DEPRESSION_SCHEMA)?;
        let estimator = model.estimator().kind();

        Ok(Self {
            encoder:   DepressionEncoder::new(gender, degree),
            predictor: Predictor::new(Box::new(model), MESSAGES),
            estimator,
        })
    }
}

impl FormPredictor for DepressionUseCase {
    fn kind(&self) -> AppKind {
        AppKind::Depression
    }

    fn title(&self) -> &'static str {
        "Student Depression Prediction"
    }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::select("gender", "Gender", self.encoder.gender_encoder().classes().to_vec()),
            FieldSpec::number("age", "Age", "1"),
            FieldSpec::number("academic_pressure", "Academic pressure (1-5)", "1"),
            FieldSpec::number("sleep_hours", "Sleep hours per night", "0.5"),
            FieldSpec::select("degree", "Degree", self.encoder.degree_encoder().classes().to_vec()),
        ]
    }

    fn defaults(&self) -> FormFields {
        FormFields::from_pairs(DEFAULT_VALUES.iter().copied())
    }

    fn predict(&self, form: &FormFields) -> Result<Prediction, PredictError> {
        let input = DepressionInput::from_form(form)?;
        tracing::debug!(?input, "depression input validated");

        let features   = self.encoder.encode(&input)?;
        let prediction = self.predictor.predict(&features)?;

        tracing::info!("depression prediction: {}", prediction.message);
        Ok(prediction)
    }

    fn summary(&self) -> ArtifactSummary {
        let gender = self.encoder.gender_encoder();
        let degree = self.encoder.degree_encoder();
        ArtifactSummary {
            estimator: self.estimator,
            features:  DEPRESSION_SCHEMA.names(),
            encoders:  vec![
                (gender.field().to_string(), gender.classes().to_vec()),
                (degree.field().to_string(), degree.classes().to_vec()),
            ],
        }
    }
}
