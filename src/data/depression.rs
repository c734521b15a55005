// ============================================================
// Layer 4 — Depression Feature Encoder
// ============================================================
// Turns the five student-depression form fields into the
// vector the depression classifier consumes:
//
//   slot  feature             source
//   ────  ──────────────────  ─────────────────────────────
//   0     gender              gender label encoder (artifact)
//   1     age                 integer
//   2     academic_pressure   integer
//   3     sleep_duration      hours (float or a duration band)
//   4     degree              degree label encoder (artifact)
//
// Sleep duration was a categorical band in the training data.
// The form accepts either a number of hours or one of the band
// labels, which are mapped to their representative value:
//
//   "Less than 5 hours" → 4.0     "7-8 hours"         → 7.5
//   "5-6 hours"         → 5.5     "More than 8 hours" → 9.0

use crate::data::form::{parse_float, FormFields};
use crate::data::label_encoder::{LabelEncoder, TypedLabelEncoder};
use crate::domain::category::{Category, Gender};
use crate::domain::error::{PredictError, ValidationError};
use crate::domain::features::{FeatureSchema, FeatureVector};
use crate::domain::traits::CategoryEncoder;

pub const DEPRESSION_SCHEMA: FeatureSchema = FeatureSchema::new(&[
    "gender",
    "age",
    "academic_pressure",
    "sleep_duration",
    "degree",
]);

pub const SLEEP_DURATION_BANDS: &[(&str, f64)] = &[
    ("Less than 5 hours", 4.0),
    ("5-6 hours",         5.5),
    ("7-8 hours",         7.5),
    ("More than 8 hours", 9.0),
];

/// Values the blank form is pre-filled with.
pub const DEFAULT_VALUES: &[(&str, &str)] = &[
    ("gender",            "Male"),
    ("age",               "25"),
    ("academic_pressure", "3"),
    ("sleep_hours",       "7.0"),
    ("degree",            "Undergraduate"),
];

/// One validated depression form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct DepressionInput {
    pub gender:            Gender,
    pub age:               i64,
    pub academic_pressure: i64,
    pub sleep_hours:       f64,
    pub degree:            String,
}

impl DepressionInput {
    pub fn from_form(form: &FormFields) -> Result<Self, ValidationError> {
        Ok(Self {
            gender:            Gender::parse(form.required("gender")?)?,
            age:               form.integer("age")?,
            academic_pressure: form.integer("academic_pressure")?,
            sleep_hours:       parse_sleep_hours(form.required("sleep_hours")?)?,
            degree:            form.required("degree")?.to_string(),
        })
    }
}

/// Hours of sleep, given either as a number or a duration band.
pub fn parse_sleep_hours(raw: &str) -> Result<f64, ValidationError> {
    SLEEP_DURATION_BANDS
        .iter()
        .find(|(label, _)| *label == raw)
        .map(|(_, hours)| Ok(*hours))
        .unwrap_or_else(|| parse_float("sleep_hours", raw))
}

/// Encodes DepressionInput using the loaded gender and degree encoders.
#[derive(Debug, Clone)]
pub struct DepressionEncoder {
    gender: TypedLabelEncoder<Gender>,
    degree: LabelEncoder,
}

impl DepressionEncoder {
    pub fn new(gender: TypedLabelEncoder<Gender>, degree: LabelEncoder) -> Self {
        Self { gender, degree }
    }

    pub fn gender_encoder(&self) -> &TypedLabelEncoder<Gender> {
        &self.gender
    }

    pub fn degree_encoder(&self) -> &LabelEncoder {
        &self.degree
    }

    pub fn encode(&self, input: &DepressionInput) -> Result<FeatureVector, PredictError> {
        // Both categories are checked before any slot is built
        let gender = self.gender.encode_typed(input.gender)?;
        let degree = self.degree.encode(&input.degree)?;

        DEPRESSION_SCHEMA
            .builder()
            .push("gender", gender)?
            .push("age", input.age as f64)?
            .push("academic_pressure", input.academic_pressure as f64)?
            .push("sleep_duration", input.sleep_hours)?
            .push("degree", degree)?
            .finish()
    }
}
