//! Trained model artifacts and their predictors

mod forest;
mod linear;
mod loader;

pub use forest::{DecisionTree, RandomForestRegressor, TreeNode};
pub use linear::LinearRegressor;
pub use loader::{load_predictor, read_artifact, ModelArtifact, ModelLoadError};
