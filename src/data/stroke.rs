// ============================================================
// Layer 4 — Stroke Feature Encoder
// ============================================================
// Turns the eight stroke form fields into the nine-slot vector
// the stroke classifier was trained on:
//
//   slot  feature             source
//   ────  ──────────────────  ──────────────────────────────────
//   0     gender              GENDER_CODES (Female 0, Male 1, Other 2)
//   1     age                 float
//   2     hypertension        YES_NO_CODES
//   3     heart_disease       YES_NO_CODES
//   4     avg_glucose_level   float
//   5     bmi                 float
//   6     smoking_status      smoking label encoder (artifact)
//   7     residence_rural     RESIDENCE_CODES one-hot
//   8     residence_urban     RESIDENCE_CODES one-hot
//
// Parsing (FormFields → StrokeInput) validates everything the
// user typed. Encoding (StrokeInput → FeatureVector) is pure.

use crate::data::form::FormFields;
use crate::data::label_encoder::TypedLabelEncoder;
use crate::data::lookup::{GENDER_CODES, RESIDENCE_CODES, YES_NO_CODES};
use crate::domain::category::{Category, Gender, ResidenceType, SmokingStatus, YesNo};
use crate::domain::error::{PredictError, ValidationError};
use crate::domain::features::{FeatureSchema, FeatureVector};

pub const STROKE_SCHEMA: FeatureSchema = FeatureSchema::new(&[
    "gender",
    "age",
    "hypertension",
    "heart_disease",
    "avg_glucose_level",
    "bmi",
    "smoking_status",
    "residence_rural",
    "residence_urban",
]);

/// The residence field was historically posted as `Residence_type`.
pub const RESIDENCE_FIELD_NAMES: &[&str] = &["residence_type", "Residence_type"];

/// One validated stroke form submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeInput {
    pub gender:            Gender,
    pub age:               f64,
    pub hypertension:      YesNo,
    pub heart_disease:     YesNo,
    pub avg_glucose_level: f64,
    pub bmi:               f64,
    pub smoking_status:    SmokingStatus,
    pub residence_type:    ResidenceType,
}

impl StrokeInput {
    /// Extract and type-convert every field.
    /// The first invalid field stops parsing.
    pub fn from_form(form: &FormFields) -> Result<Self, ValidationError> {
        Ok(Self {
            gender:            Gender::parse(form.required("gender")?)?,
            age:               form.float("age")?,
            hypertension:      YesNo::parse_field("hypertension", form.required("hypertension")?)?,
            heart_disease:     YesNo::parse_field("heart_disease", form.required("heart_disease")?)?,
            avg_glucose_level: form.float("avg_glucose_level")?,
            bmi:               form.float("bmi")?,
            smoking_status:    SmokingStatus::parse(form.required("smoking_status")?)?,
            residence_type:    ResidenceType::parse(form.required_any(RESIDENCE_FIELD_NAMES)?)?,
        })
    }
}

/// Encodes StrokeInput using the loaded smoking encoder.
#[derive(Debug, Clone)]
pub struct StrokeEncoder {
    smoking: TypedLabelEncoder<SmokingStatus>,
}

impl StrokeEncoder {
    pub fn new(smoking: TypedLabelEncoder<SmokingStatus>) -> Self {
        Self { smoking }
    }

    pub fn smoking_encoder(&self) -> &TypedLabelEncoder<SmokingStatus> {
        &self.smoking
    }

    pub fn encode(&self, input: &StrokeInput) -> Result<FeatureVector, PredictError> {
        STROKE_SCHEMA
            .builder()
            .extend(&["gender"], GENDER_CODES.encode(input.gender)?)?
            .push("age", input.age)?
            .extend(&["hypertension"], YES_NO_CODES.encode(input.hypertension)?)?
            .extend(&["heart_disease"], YES_NO_CODES.encode(input.heart_disease)?)?
            .push("avg_glucose_level", input.avg_glucose_level)?
            .push("bmi", input.bmi)?
            .push("smoking_status", self.smoking.encode_typed(input.smoking_status)?)?
            .extend(
                &["residence_rural", "residence_urban"],
                RESIDENCE_CODES.encode(input.residence_type)?,
            )?
            .finish()
    }
}
