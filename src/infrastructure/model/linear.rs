use serde::Deserialize;

use crate::domain::{DomainError, FeatureVector, Predictor, FEATURE_COUNT};

/// Ordinary least squares model: `intercept + coefficients · x`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinearRegressor {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearRegressor {
    pub fn check(&self) -> Result<(), String> {
        if self.coefficients.len() != FEATURE_COUNT {
            return Err(format!(
                "expected {} coefficients, got {}",
                FEATURE_COUNT,
                self.coefficients.len()
            ));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err("coefficients must be finite".to_string());
        }

        Ok(())
    }
}

impl Predictor for LinearRegressor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, DomainError> {
        let values = features.as_slice();
        if values.len() != self.coefficients.len() {
            return Err(DomainError::feature_mismatch(
                self.coefficients.len(),
                values.len(),
            ));
        }

        let dot: f64 = values
            .iter()
            .zip(&self.coefficients)
            .map(|(x, w)| x * w)
            .sum();

        Ok(self.intercept + dot)
    }

    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn kind(&self) -> &'static str {
        "linear"
    }
}
