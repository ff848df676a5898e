//! HTML prediction page
//!
//! `GET /` renders the form with default values. `POST /predict` is the
//! "Predict" action: it scores the submitted values and renders the page again
//! with the result (or an inline error) below the form.

pub mod content;
pub mod render;

use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    routing::{get, post},
    Form, Router,
};
use tracing::{debug, warn};

use super::state::AppState;
use crate::domain::{HealthMetrics, PredictionOutcome};
use render::{render_page, PageView};

/// Create the page router
pub fn create_ui_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/predict", post(predict).get(index))
}

/// GET /
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let animation = state.animation.fetch().await;

    Html(render_page(&PageView::new(HealthMetrics::default(), animation)))
}

/// POST /predict
pub async fn predict(
    State(state): State<AppState>,
    form: Result<Form<HealthMetrics>, FormRejection>,
) -> Html<String> {
    let animation = state.animation.fetch().await;

    let view = match form {
        Ok(Form(metrics)) => {
            debug!(?metrics, "Predict pressed");
            let outcome = state.predict(&metrics);
            PageView::new(metrics, animation).with_outcome(outcome)
        }
        Err(rejection) => {
            warn!(error = %rejection, "Unreadable form submission");
            PageView::new(HealthMetrics::default(), animation).with_outcome(
                PredictionOutcome::Failed {
                    message: format!("Invalid input: {}", rejection.body_text()),
                },
            )
        }
    };

    Html(render_page(&view))
}
