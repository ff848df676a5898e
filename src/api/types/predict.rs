//! Request/response bodies of the JSON prediction endpoint

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{format_prediction, Feature, FeatureVector};

/// The request body is the seven named metrics
pub type PredictRequest = crate::domain::HealthMetrics;

/// One feature as it was sent to the model
#[derive(Debug, Clone, Serialize)]
pub struct FeatureValue {
    pub name: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
    pub prediction: f64,
    pub message: String,
    pub model: String,
    pub features: Vec<FeatureValue>,
    pub predicted_at: DateTime<Utc>,
}

impl PredictResponse {
    pub fn new(features: &FeatureVector, prediction: f64, model: impl Into<String>) -> Self {
        Self {
            prediction,
            message: format_prediction(prediction),
            model: model.into(),
            features: Feature::ALL
                .iter()
                .map(|feature| FeatureValue {
                    name: feature.name(),
                    value: features.get(*feature),
                })
                .collect(),
            predicted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HealthMetrics;

    #[test]
    fn test_response_lists_features_in_order() {
        let vector = HealthMetrics::default().to_feature_vector();
        let response = PredictResponse::new(&vector, 0.42, "random_forest");

        let names: Vec<_> = response.features.iter().map(|f| f.name).collect();
        assert_eq!(names, Feature::names());
        assert_eq!(response.message, "The predicted likelihood of diabetes is: 0.42");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["features"][2]["name"], "glucose");
        assert_eq!(json["features"][2]["value"], 100.0);
        assert_eq!(json["model"], "random_forest");
    }
}
