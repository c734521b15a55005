// ============================================================
// Layer 5 — ML / Model Layer
// ============================================================
// The models themselves are trained elsewhere and treated as
// opaque boxes. This layer only knows how to:
//
//   model.rs     — validate a classifier artifact against the
//                  feature contract and evaluate its decision
//                  function (linear, logistic, kernel SVC)
//
//   predictor.rs — call the classifier once per request and map
//                  the 0/1 label onto a fixed sentence
//
// No other layer evaluates model math directly.

/// Classifier artifacts and decision functions
pub mod model;

/// Label → message mapping around a classifier
pub mod predictor;
