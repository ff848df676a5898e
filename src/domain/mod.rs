//! Domain layer - health metrics, the predictor contract, and the prediction action

pub mod animation;
pub mod error;
pub mod features;
pub mod prediction;
pub mod predictor;

pub use animation::{Animation, AnimationSource, DisabledAnimation};
pub use error::DomainError;
pub use features::{Control, ControlKind, Feature, FeatureVector, HealthMetrics, FEATURE_COUNT};
pub use prediction::{format_prediction, PredictionOutcome, PredictionService};
pub use predictor::Predictor;
