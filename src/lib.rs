//! Diabetes Prediction
//!
//! A form that collects seven health metrics, scores them with a pre-trained
//! regression model and shows the result:
//! - Model artifact loaded once at startup and injected into the handlers
//! - Server-rendered HTML page plus a JSON prediction endpoint
//! - Decorative animation fetched per page render, degrading to nothing

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use anyhow::Context;

use api::state::AppState;
use infrastructure::{animation::create_animation_source, model::load_predictor};

/// Build the application state from configuration.
///
/// Fails when the model artifact cannot be loaded; the server must not start
/// without a predictor.
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let predictor = load_predictor(&config.model.path).with_context(|| {
        format!(
            "cannot serve predictions without a model (set model.path or APP__MODEL__PATH, currently '{}')",
            config.model.path
        )
    })?;

    let animation = create_animation_source(&config.animation)
        .context("failed to build the animation HTTP client")?;

    Ok(AppState::new(predictor, animation))
}
