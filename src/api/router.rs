use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{logging_middleware, metrics_middleware, security_headers_middleware};
use super::state::AppState;
use super::ui;
use super::v1;
use crate::infrastructure::observability::{create_metrics_router, PrometheusMetrics};

/// Create the full router: page, JSON API, probes, and optionally metrics
pub fn create_router(state: AppState, metrics: Option<PrometheusMetrics>) -> Router {
    let mut router = Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Prediction page
        .merge(ui::create_ui_router())
        // JSON API
        .nest("/v1", v1::create_v1_router())
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http());

    if let Some(m) = metrics {
        router = router.merge(create_metrics_router(m));
    }

    router
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::domain::animation::mock::MockAnimationSource;
    use crate::domain::predictor::mock::ConstantPredictor;

    fn router() -> Router {
        let state = AppState::new(
            Arc::new(ConstantPredictor::new(0.42)),
            Arc::new(MockAnimationSource::new()),
        );
        create_router(state, None)
    }

    #[tokio::test]
    async fn test_page_has_html_security_headers() {
        let response = router()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let csp = response.headers()[header::CONTENT_SECURITY_POLICY]
            .to_str()
            .unwrap();
        assert!(csp.contains("cdnjs.cloudflare.com"));
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_probes() {
        for path in ["/health", "/ready", "/live"] {
            let response = router()
                .oneshot(Request::get(path).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "{}", path);
        }
    }

    #[tokio::test]
    async fn test_request_id_echoed() {
        let response = router()
            .oneshot(
                Request::get("/live")
                    .header("x-request-id", "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()["x-request-id"], "abc-123");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = router()
            .oneshot(Request::get("/admin").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_long_non_ascii_path_is_404() {
        let path = format!("/{}é/x", "a".repeat(48));

        let response = router()
            .oneshot(Request::get(path.as_str()).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
