//! Prometheus metrics infrastructure

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;
use regex::Regex;

use super::config::MetricsConfig;

static UUID_SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}")
        .expect("valid uuid pattern")
});

static NUMERIC_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\d+(/|$)").expect("valid numeric segment pattern"));

/// Prometheus metrics handle for serving metrics endpoint
#[derive(Clone)]
pub struct PrometheusMetrics {
    handle: Arc<PrometheusHandle>,
    path: String,
}

impl PrometheusMetrics {
    /// Get the metrics as a string for the metrics endpoint
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// Initialize Prometheus metrics
pub fn init_metrics(config: &MetricsConfig) -> Option<PrometheusMetrics> {
    if !config.enabled {
        tracing::info!("Prometheus metrics disabled");
        return None;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            gauge!("diabetes_predictor_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);

            tracing::info!("Prometheus metrics initialized at {}", config.path);

            Some(PrometheusMetrics {
                handle: Arc::new(handle),
                path: config.path.clone(),
            })
        }
        Err(e) => {
            tracing::error!("Failed to initialize Prometheus metrics: {}", e);
            None
        }
    }
}

/// Create the metrics router
pub fn create_metrics_router(metrics: PrometheusMetrics) -> Router {
    let path = metrics.path.clone();

    Router::new()
        .route(&path, get(metrics_handler))
        .with_state(metrics)
}

async fn metrics_handler(State(metrics): State<PrometheusMetrics>) -> impl IntoResponse {
    metrics.render()
}

/// Record an HTTP request metric
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", sanitize_path(path)),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());

    if status >= 500 {
        counter!("http_server_errors_total", &labels).increment(1);
    }
}

/// Record one invocation of the predictor
pub fn record_prediction(model: &str, success: bool, duration: Duration) {
    let labels = [
        ("model", model.to_string()),
        ("outcome", if success { "success" } else { "error" }.to_string()),
    ];

    counter!("predictions_total", &labels).increment(1);
    histogram!("prediction_duration_seconds", &labels).record(duration.as_secs_f64());
}

/// Record one animation fetch (`ok`, `bad_status`, `transport_error`, `malformed_body`)
pub fn record_animation_fetch(outcome: &'static str) {
    counter!("animation_fetches_total", "outcome" => outcome).increment(1);
}

const MAX_PATH_LABEL_CHARS: usize = 50;

/// Sanitize URL path for metric labels (remove IDs, limit cardinality)
fn sanitize_path(path: &str) -> String {
    let path = UUID_SEGMENT.replace_all(path, "{id}");
    let path = NUMERIC_SEGMENT.replace_all(&path, "/{id}$1");

    match path.char_indices().nth(MAX_PATH_LABEL_CHARS) {
        Some((end, _)) => path[..end].to_string(),
        None => path.to_string(),
    }
}
