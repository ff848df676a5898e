//! Application state shared by all handlers

use std::sync::Arc;
use std::time::Instant;

use crate::domain::{
    AnimationSource, DomainError, FeatureVector, HealthMetrics, PredictionOutcome,
    PredictionService, Predictor,
};
use crate::infrastructure::observability::record_prediction;

/// Everything a request needs, constructed once at startup
#[derive(Clone, Debug)]
pub struct AppState {
    pub predictions: PredictionService,
    pub animation: Arc<dyn AnimationSource>,
}

impl AppState {
    pub fn new(predictor: Arc<dyn Predictor>, animation: Arc<dyn AnimationSource>) -> Self {
        Self {
            predictions: PredictionService::new(predictor),
            animation,
        }
    }

    pub fn predictor(&self) -> &dyn Predictor {
        self.predictions.predictor()
    }

    /// Run the "Predict" action for the HTML form, recording metrics
    pub fn predict(&self, metrics: &HealthMetrics) -> PredictionOutcome {
        let start = Instant::now();
        let outcome = self.predictions.predict(metrics);

        record_prediction(
            self.predictor().kind(),
            outcome.is_success(),
            start.elapsed(),
        );

        outcome
    }

    /// Run a prediction for the JSON API, recording metrics
    pub fn score(&self, metrics: &HealthMetrics) -> Result<(FeatureVector, f64), DomainError> {
        let start = Instant::now();
        let result = self.predictions.score(metrics);

        record_prediction(self.predictor().kind(), result.is_ok(), start.elapsed());

        result
    }
}
