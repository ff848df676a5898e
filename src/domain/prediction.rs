//! The "Predict" action: assemble the feature vector, score it, and turn the
//! result (or failure) into display text.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use super::features::{FeatureVector, HealthMetrics};
use super::predictor::Predictor;
use crate::domain::DomainError;

/// What the result area shows after a prediction
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PredictionOutcome {
    Score { value: f64 },
    Failed { message: String },
}

impl PredictionOutcome {
    pub fn score(&self) -> Option<f64> {
        match self {
            Self::Score { value } => Some(*value),
            Self::Failed { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Score { .. })
    }

    /// Text rendered into the result area
    pub fn message(&self) -> String {
        match self {
            Self::Score { value } => format_prediction(*value),
            Self::Failed { message } => message.clone(),
        }
    }
}

/// Format a score with two decimal places
pub fn format_prediction(score: f64) -> String {
    format!("The predicted likelihood of diabetes is: {:.2}", score)
}

/// Runs predictions against an injected predictor
#[derive(Debug, Clone)]
pub struct PredictionService {
    predictor: Arc<dyn Predictor>,
}

impl PredictionService {
    pub fn new(predictor: Arc<dyn Predictor>) -> Self {
        Self { predictor }
    }

    pub fn predictor(&self) -> &dyn Predictor {
        self.predictor.as_ref()
    }

    /// Score the metrics, propagating any failure
    pub fn score(&self, metrics: &HealthMetrics) -> Result<(FeatureVector, f64), DomainError> {
        metrics
            .check()
            .map_err(|errors| DomainError::validation(errors.join("; ")))?;

        let features = metrics.to_feature_vector();
        let score = self.predictor.predict(&features)?;

        if !score.is_finite() {
            return Err(DomainError::prediction(format!(
                "model returned a non-finite score ({})",
                score
            )));
        }

        debug!(features = ?features.as_slice(), score, "Prediction computed");

        Ok((features, score))
    }

    /// Score the metrics, catching every failure into an inline message
    pub fn predict(&self, metrics: &HealthMetrics) -> PredictionOutcome {
        match self.score(metrics) {
            Ok((_, value)) => PredictionOutcome::Score { value },
            Err(e) => {
                warn!(error = %e, model = self.predictor.kind(), "Prediction failed");
                PredictionOutcome::Failed {
                    message: failure_message(&e),
                }
            }
        }
    }
}

fn failure_message(error: &DomainError) -> String {
    match error {
        DomainError::Validation { message } => format!("Invalid input: {}", message),
        other => format!("Unable to compute a prediction: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::predictor::MockPredictor;
    use crate::domain::predictor::mock::ConstantPredictor;

    fn service(predictor: impl Predictor + 'static) -> PredictionService {
        PredictionService::new(Arc::new(predictor))
    }

    #[test]
    fn test_format_prediction_two_decimals() {
        assert_eq!(
            format_prediction(0.42),
            "The predicted likelihood of diabetes is: 0.42"
        );
        assert_eq!(
            format_prediction(1.0),
            "The predicted likelihood of diabetes is: 1.00"
        );
        assert_eq!(
            format_prediction(0.4567),
            "The predicted likelihood of diabetes is: 0.46"
        );
    }

    #[test]
    fn test_defaults_with_stub_predictor() {
        let outcome = service(ConstantPredictor::new(0.42)).predict(&HealthMetrics::default());

        assert_eq!(
            outcome.message(),
            "The predicted likelihood of diabetes is: 0.42"
        );
        assert_eq!(outcome.score(), Some(0.42));
    }

    #[test]
    fn test_constant_predictor_any_input() {
        let service = service(ConstantPredictor::new(0.7));
        let metrics = HealthMetrics {
            age: 80,
            glucose: 199,
            ..HealthMetrics::default()
        };

        assert_eq!(
            service.predict(&metrics).message(),
            "The predicted likelihood of diabetes is: 0.70"
        );
    }

    #[test]
    fn test_repeated_prediction_is_identical() {
        let service = service(ConstantPredictor::new(0.123));
        let metrics = HealthMetrics::default();

        let first = service.predict(&metrics).message();
        let second = service.predict(&metrics).message();

        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_predictor_receives_vector_in_order() {
        let mut predictor = MockPredictor::new();
        predictor
            .expect_predict()
            .withf(|features| {
                features.as_slice() == [25.0, 25.0, 100.0, 80.0, 80.0, 20.0, 0.5]
            })
            .times(1)
            .returning(|_| Ok(0.31));
        predictor.expect_kind().return_const("mock");

        let outcome = service(predictor).predict(&HealthMetrics::default());

        assert_eq!(outcome, PredictionOutcome::Score { value: 0.31 });
    }

    #[test]
    fn test_predictor_error_becomes_inline_message() {
        let outcome = service(ConstantPredictor::failing("shape mismatch"))
            .predict(&HealthMetrics::default());

        assert!(!outcome.is_success());
        assert_eq!(
            outcome.message(),
            "Unable to compute a prediction: Prediction failed: shape mismatch"
        );
    }

    #[test]
    fn test_non_finite_score_is_a_failure() {
        let outcome = service(ConstantPredictor::new(f64::NAN)).predict(&HealthMetrics::default());

        assert!(!outcome.is_success());
        assert!(outcome.message().contains("non-finite"));
    }

    #[test]
    fn test_out_of_range_input_never_reaches_predictor() {
        let mut predictor = MockPredictor::new();
        predictor.expect_predict().never();
        predictor.expect_kind().return_const("mock");

        let metrics = HealthMetrics {
            glucose: 250,
            ..HealthMetrics::default()
        };
        let outcome = service(predictor).predict(&metrics);

        assert_eq!(
            outcome.message(),
            "Invalid input: Glucose Level must be between 0 and 200"
        );
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_string(&PredictionOutcome::Score { value: 0.5 }).unwrap();
        assert_eq!(json, r#"{"status":"score","value":0.5}"#);
    }
}
