// ============================================================
// Layer 3 — Prediction Result
// ============================================================
// Both models are binary classifiers. Their raw output is a
// label 0 or 1, which is mapped to exactly one of two fixed
// human-readable sentences chosen per model.

/// The raw class a binary classifier returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryLabel {
    Negative,
    Positive,
}

impl BinaryLabel {
    pub fn as_int(self) -> u8 {
        match self {
            Self::Negative => 0,
            Self::Positive => 1,
        }
    }
}

/// The two sentences a model's output maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeMessages {
    pub positive: &'static str,
    pub negative: &'static str,
}

impl OutcomeMessages {
    pub fn message_for(&self, label: BinaryLabel) -> &'static str {
        match label {
            BinaryLabel::Positive => self.positive,
            BinaryLabel::Negative => self.negative,
        }
    }
}

/// What a request gets back after a successful prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label:   BinaryLabel,
    pub message: &'static str,

    /// Raw decision-function value (margin or log-odds)
    pub score: f64,

    /// Positive-class probability, when the model provides one
    pub probability: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_for_label() {
        let m = OutcomeMessages { positive: "yes", negative: "no" };
        assert_eq!(m.message_for(BinaryLabel::Positive), "yes");
        assert_eq!(m.message_for(BinaryLabel::Negative), "no");
        assert_eq!(BinaryLabel::Positive.as_int(), 1);
    }
}
