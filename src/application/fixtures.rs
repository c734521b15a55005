// Test artifacts shared by the application and web tests.
//
// The models are small hand-made linear/logistic classifiers,
// not trained ones; they only need to produce both labels for
// realistic inputs.

use std::fs;

use tempfile::TempDir;

pub const STROKE_MODEL: &str = r#"{
    "features": ["gender", "age", "hypertension", "heart_disease",
                 "avg_glucose_level", "bmi", "smoking_status",
                 "residence_rural", "residence_urban"],
    "estimator": {
        "type": "linear",
        "coef": [0.0, 0.05, 1.0, 1.0, 0.01, 0.02, 0.0, 0.0, 0.0],
        "intercept": -5.0
    }
}"#;

pub const SMOKING_ENCODER: &str = r#"{
    "field": "smoking_status",
    "classes": ["Unknown", "formerly smoked", "never smoked", "smokes"]
}"#;

pub const DEPRESSION_MODEL: &str = r#"{
    "features": ["gender", "age", "academic_pressure", "sleep_duration", "degree"],
    "estimator": {
        "type": "logistic",
        "coef": [0.0, 0.0, 1.0, -0.5, 0.0],
        "intercept": -0.5
    }
}"#;

pub const GENDER_ENCODER: &str = r#"{"field": "gender", "classes": ["Female", "Male"]}"#;

pub const DEGREE_ENCODER: &str = r#"{
    "field": "degree",
    "classes": ["B.Pharm", "B.Tech", "BA", "Class 12", "MD", "PhD", "Undergraduate"]
}"#;

/// A temp directory holding a valid artifact set for both apps.
pub fn artifacts_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, body) in [
        ("stroke-model.json", STROKE_MODEL),
        ("smoking-encoder.json", SMOKING_ENCODER),
        ("depression-model.json", DEPRESSION_MODEL),
        ("gender-encoder.json", GENDER_ENCODER),
        ("degree-encoder.json", DEGREE_ENCODER),
    ] {
        fs::write(dir.path().join(name), body).unwrap();
    }
    dir
}

/// The reference stroke submission.
pub fn stroke_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("gender", "Male"),
        ("age", "67.0"),
        ("hypertension", "No"),
        ("heart_disease", "Yes"),
        ("avg_glucose_level", "228.69"),
        ("bmi", "36.0"),
        ("smoking_status", "formerly smoked"),
        ("residence_type", "Urban"),
    ]
}
