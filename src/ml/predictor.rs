// ============================================================
// Layer 5 — Predictor
// ============================================================
// Wraps a validated classifier together with the two fixed
// outcome sentences for its model. One classifier call per
// request; nothing is cached and nothing is retried, because
// every failure here is deterministic.

use crate::domain::error::PredictError;
use crate::domain::features::FeatureVector;
use crate::domain::prediction::{OutcomeMessages, Prediction};
use crate::domain::traits::Classifier;

pub struct Predictor {
    classifier: Box<dyn Classifier>,
    messages:   OutcomeMessages,
}

impl Predictor {
    pub fn new(classifier: Box<dyn Classifier>, messages: OutcomeMessages) -> Self {
        Self { classifier, messages }
    }

    pub fn predict(&self, features: &FeatureVector) -> Result<Prediction, PredictError> {
        if features.len() != self.classifier.n_features() {
            return Err(PredictError::unexpected(format!(
                "classifier expects {} features, got {}",
                self.classifier.n_features(),
                features.len()
            )));
        }

        let c = self.classifier.classify(features)?;
        tracing::debug!(label = c.label.as_int(), score = c.score, "classified");

        Ok(Prediction {
            label:       c.label,
            message:     self.messages.message_for(c.label),
            score:       c.score,
            probability: c.probability,
        })
    }
}

impl std::fmt::Debug for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predictor")
            .field("n_features", &self.classifier.n_features())
            .field("messages", &self.messages)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::features::FeatureSchema;
    use crate::domain::prediction::BinaryLabel;
    use crate::domain::traits::Classification;

    const SCHEMA: FeatureSchema = FeatureSchema::new(&["a"]);
    const MESSAGES: OutcomeMessages = OutcomeMessages { positive: "pos", negative: "neg" };

    /// Positive when the single feature is above a threshold
    struct Threshold(f64);

    impl Classifier for Threshold {
        fn n_features(&self) -> usize {
            1
        }

        fn classify(&self, features: &FeatureVector) -> Result<Classification, PredictError> {
            let score = features.values()[0] - self.0;
            let label = if score > 0.0 { BinaryLabel::Positive } else { BinaryLabel::Negative };
            Ok(Classification { label, score, probability: None })
        }
    }

    fn vector(a: f64) -> FeatureVector {
        SCHEMA.builder().push("a", a).unwrap().finish().unwrap()
    }

    #[test]
    fn test_maps_label_to_message() {
        let p = Predictor::new(Box::new(Threshold(0.5)), MESSAGES);
        assert_eq!(p.predict(&vector(1.0)).unwrap().message, "pos");
        assert_eq!(p.predict(&vector(0.0)).unwrap().message, "neg");
    }

    #[test]
    fn test_same_input_same_prediction() {
        let p = Predictor::new(Box::new(Threshold(0.5)), MESSAGES);
        assert_eq!(p.predict(&vector(0.7)).unwrap(), p.predict(&vector(0.7)).unwrap());
    }

    #[test]
    fn test_length_mismatch_is_unexpected() {
        let p = Predictor::new(Box::new(Threshold(0.5)), MESSAGES);
        let wide = FeatureSchema::new(&["a", "b"])
            .builder()
            .push("a", 1.0).unwrap()
            .push("b", 1.0).unwrap()
            .finish()
            .unwrap();
        assert!(!p.predict(&wide).unwrap_err().is_validation());
    }
}
