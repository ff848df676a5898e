//! Health check endpoints for Kubernetes probes

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use super::state::AppState;
use crate::domain::HealthMetrics;

/// Health response with optional component status
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Returns 200 whenever the process is serving
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: HealthStatus::Healthy,
            version: env!("CARGO_PKG_VERSION").to_string(),
            checks: None,
            latency_ms: None,
        }),
    )
}

/// Ready when the loaded model scores the default inputs.
///
/// The animation is decorative and never affects readiness.
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();
    let check = check_model(&state);
    let status = check.status;

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(vec![check]),
        latency_ms: Some(start.elapsed().as_millis() as u64),
    };

    let status_code = match status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Liveness probe
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

fn check_model(state: &AppState) -> HealthCheck {
    let predictor = state.predictor();

    match state.predictions.score(&HealthMetrics::default()) {
        Ok(_) => HealthCheck {
            name: "model".to_string(),
            status: HealthStatus::Healthy,
            message: Some(format!(
                "{} over {} features",
                predictor.kind(),
                predictor.feature_names().len()
            )),
        },
        Err(e) => HealthCheck {
            name: "model".to_string(),
            status: HealthStatus::Unhealthy,
            message: Some(e.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::animation::mock::MockAnimationSource;
    use crate::domain::predictor::mock::ConstantPredictor;

    fn state(predictor: ConstantPredictor) -> AppState {
        AppState::new(Arc::new(predictor), Arc::new(MockAnimationSource::new()))
    }

    #[test]
    fn test_health_status_serialization() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::Healthy).unwrap(),
            "\"healthy\""
        );
        assert_eq!(
            serde_json::to_string(&HealthStatus::Unhealthy).unwrap(),
            "\"unhealthy\""
        );
    }

    #[test]
    fn test_health_response_without_checks() {
        let response = HealthResponse {
            status: HealthStatus::Healthy,
            version: "1.0.0".to_string(),
            checks: None,
            latency_ms: None,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
        assert!(!json.contains("checks"));
    }

    #[test]
    fn test_model_check_healthy() {
        let check = check_model(&state(ConstantPredictor::new(0.3)));

        assert_eq!(check.status, HealthStatus::Healthy);
        assert_eq!(check.message.as_deref(), Some("constant over 7 features"));
    }

    #[test]
    fn test_model_check_unhealthy() {
        let check = check_model(&state(ConstantPredictor::failing("corrupt")));

        assert_eq!(check.status, HealthStatus::Unhealthy);
        assert!(check.message.unwrap().contains("corrupt"));
    }

    #[tokio::test]
    async fn test_ready_returns_503_when_model_fails() {
        let response = ready_check(State(state(ConstantPredictor::failing("corrupt"))))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
