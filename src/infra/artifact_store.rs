// ============================================================
// Layer 6 — Artifact Store
// ============================================================
// Loads the encoder and model artifacts from an artifacts
// directory at process start. Every load either returns a
// fully validated object or a StartupError that says which
// file was at fault and why:
//
//   ArtifactNotFound      the file is not there
//   CorruptArtifact       unreadable, or not JSON of the expected shape
//   IncompatibleArtifact  valid JSON that breaks the contract
//                         (feature order, dimensions, class set)
//
// The store never retries and never falls back to defaults:
// serving with a missing or wrong artifact is worse than not
// serving at all.
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json documentation

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;

use crate::data::label_encoder::{ClassCoverage, EncoderArtifact, LabelEncoder, TypedLabelEncoder};
use crate::domain::category::Category;
use crate::domain::error::StartupError;
use crate::domain::features::FeatureSchema;
use crate::domain::traits::CategoryEncoder;
use crate::ml::model::{LoadedModel, ModelArtifact};

/// Reads artifacts from one directory.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_of(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    /// Read and deserialise one JSON artifact.
    fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<(PathBuf, T), StartupError> {
        let path = self.path_of(file);

        let bytes = fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StartupError::ArtifactNotFound { path: path.clone() },
            _ => StartupError::CorruptArtifact { path: path.clone(), reason: e.to_string() },
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| StartupError::CorruptArtifact {
            path:   path.clone(),
            reason: e.to_string(),
        })?;

        Ok((path, value))
    }

    /// Load an open-class label encoder for `field`.
    pub fn load_label_encoder(&self, file: &str, field: &str) -> Result<LabelEncoder, StartupError> {
        let (path, artifact) = self.read_json::<EncoderArtifact>(file)?;
        let encoder = LabelEncoder::from_artifact(field, artifact)
            .map_err(|reason| StartupError::incompatible(&path, reason))?;

        tracing::info!(
            "Loaded {} encoder from '{}' ({} classes)",
            field,
            path.display(),
            encoder.classes().len()
        );
        Ok(encoder)
    }

    /// Load a label encoder and check its classes against `C`.
    pub fn load_typed_encoder<C: Category>(
        &self,
        file:     &str,
        coverage: ClassCoverage,
    ) -> Result<TypedLabelEncoder<C>, StartupError> {
        let (path, artifact) = self.read_json::<EncoderArtifact>(file)?;
        let encoder = TypedLabelEncoder::<C>::from_artifact(artifact, coverage)
            .map_err(|reason| StartupError::incompatible(&path, reason))?;

        tracing::info!(
            "Loaded {} encoder from '{}' ({} classes)",
            C::FIELD,
            path.display(),
            encoder.variants().count()
        );
        Ok(encoder)
    }

    /// Load a classifier and check it against the app's feature schema.
    pub fn load_model(&self, file: &str, schema: FeatureSchema) -> Result<LoadedModel, StartupError> {
        let (path, artifact) = self.read_json::<ModelArtifact>(file)?;
        let model = LoadedModel::from_artifact(schema, artifact)
            .map_err(|reason| StartupError::incompatible(&path, reason))?;

        tracing::info!(
            "Loaded {} model from '{}' ({} features)",
            model.estimator().kind(),
            path.display(),
            schema.len()
        );
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::SmokingStatus;

    const SCHEMA: FeatureSchema = FeatureSchema::new(&["x", "y"]);

    fn store_with(files: &[(&str, &str)]) -> (tempfile::TempDir, ArtifactStore) {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in files {
            fs::write(dir.path().join(name), body).unwrap();
        }
        let store = ArtifactStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let (_dir, store) = store_with(&[]);
        let err = store.load_label_encoder("degree-encoder.json", "degree").unwrap_err();
        assert!(matches!(err, StartupError::ArtifactNotFound { .. }));
    }

    #[test]
    fn test_garbage_is_corrupt() {
        let (_dir, store) = store_with(&[("model.json", "\u{80}\u{3}pickle")]);
        let err = store.load_model("model.json", SCHEMA).unwrap_err();
        assert!(matches!(err, StartupError::CorruptArtifact { .. }));
    }

    #[test]
    fn test_wrong_shape_is_corrupt() {
        let (_dir, store) = store_with(&[("enc.json", r#"{"labels": ["a"]}"#)]);
        let err = store.load_label_encoder("enc.json", "degree").unwrap_err();
        assert!(matches!(err, StartupError::CorruptArtifact { .. }));
    }

    #[test]
    fn test_contract_violation_is_incompatible() {
        let (_dir, store) = store_with(&[(
            "model.json",
            r#"{"features": ["y", "x"], "estimator": {"type": "linear", "coef": [1.0, 2.0], "intercept": 0.0}}"#,
        )]);
        let err = store.load_model("model.json", SCHEMA).unwrap_err();
        assert!(matches!(err, StartupError::IncompatibleArtifact { .. }));
        assert!(err.to_string().contains("model.json"));
    }

    #[test]
    fn test_loads_valid_artifacts() {
        let (_dir, store) = store_with(&[
            (
                "model.json",
                r#"{"features": ["x", "y"], "estimator": {"type": "logistic", "coef": [0.5, -0.5], "intercept": 0.1}}"#,
            ),
            (
                "smoking.json",
                r#"{"field": "smoking_status", "classes": ["Unknown", "formerly smoked", "never smoked", "smokes"]}"#,
            ),
        ]);
        assert!(store.load_model("model.json", SCHEMA).is_ok());
        let enc = store
            .load_typed_encoder::<SmokingStatus>("smoking.json", ClassCoverage::Exact)
            .unwrap();
        assert_eq!(enc.classes().len(), 4);
    }
}
