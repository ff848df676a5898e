use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Prediction failed: {message}")]
    Prediction { message: String },

    #[error("Feature mismatch: expected {expected} features, got {actual}")]
    FeatureMismatch { expected: usize, actual: usize },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn prediction(message: impl Into<String>) -> Self {
        Self::Prediction {
            message: message.into(),
        }
    }

    pub fn feature_mismatch(expected: usize, actual: usize) -> Self {
        Self::FeatureMismatch { expected, actual }
    }
}
