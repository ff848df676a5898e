//! JSON error types for the prediction API

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Error categories reported to API clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    ServerError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequestError => write!(f, "invalid_request_error"),
            Self::ServerError => write!(f, "server_error"),
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                    code: None,
                },
            },
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.response.error.code = Some(code.into());
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorType::InvalidRequestError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ApiErrorType::ServerError, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::Validation { message } => {
                Self::bad_request(message).with_code("out_of_range")
            }
            DomainError::FeatureMismatch { .. } => {
                Self::internal(err.to_string()).with_code("feature_mismatch")
            }
            DomainError::Prediction { .. } => {
                Self::internal(err.to_string()).with_code("prediction_failed")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = match &rejection {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
            JsonRejection::JsonSyntaxError(err) => {
                format!("Invalid JSON syntax: {}", err.body_text())
            }
            JsonRejection::MissingJsonContentType(_) => {
                "Missing Content-Type header. Expected 'application/json'.".to_string()
            }
            other => other.body_text(),
        };

        Self::new(rejection.status(), ApiErrorType::InvalidRequestError, message)
            .with_code("json_parse_error")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.error.error_type, self.response.error.message
        )
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::bad_request("BMI must be between 0.0 and 50.0");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.error.error_type, ApiErrorType::InvalidRequestError);
        assert_eq!(err.response.error.message, "BMI must be between 0.0 and 50.0");
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let api_err: ApiError = DomainError::validation("Age must be between 0 and 100").into();

        assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_err.response.error.code.as_deref(), Some("out_of_range"));
    }

    #[test]
    fn test_prediction_failure_maps_to_server_error() {
        let api_err: ApiError = DomainError::prediction("bad tree").into();

        assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_err.response.error.error_type, ApiErrorType::ServerError);
        assert_eq!(api_err.response.error.message, "Prediction failed: bad tree");
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::internal("model not loaded");
        let json = serde_json::to_string(&err.response).unwrap();

        assert!(json.contains("\"type\":\"server_error\""));
        assert!(!json.contains("\"code\""));
    }
}
