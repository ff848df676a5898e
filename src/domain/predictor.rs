use std::fmt::Debug;

#[cfg(test)]
use mockall::automock;

use super::features::FeatureVector;
use crate::domain::DomainError;

/// A pre-trained model exposing a single vector-in/scalar-out operation
#[cfg_attr(test, automock)]
pub trait Predictor: Send + Sync + Debug {
    /// Score one feature vector
    fn predict(&self, features: &FeatureVector) -> Result<f64, DomainError>;

    /// Column names the model was trained on, in vector order
    fn feature_names(&self) -> &[String];

    /// Short label of the model family, e.g. `random_forest`
    fn kind(&self) -> &'static str;
}
