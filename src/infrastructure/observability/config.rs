//! Observability configuration

use serde::Deserialize;

/// Main observability configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ObservabilityConfig {
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Prometheus metrics configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    /// Enable Prometheus metrics
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Metrics endpoint path
    #[serde(default = "default_metrics_path")]
    pub path: String,
}

fn default_true() -> bool {
    true
}

fn default_metrics_path() -> String {
    "/metrics".to_string()
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_metrics_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_observability_config() {
        let config = ObservabilityConfig::default();

        assert!(config.metrics.enabled);
        assert_eq!(config.metrics.path, "/metrics");
    }

    #[test]
    fn test_metrics_path_override() {
        let config: MetricsConfig = serde_json::from_str(r#"{"path": "/internal/metrics"}"#).unwrap();

        assert!(config.enabled);
        assert_eq!(config.path, "/internal/metrics");
    }
}
