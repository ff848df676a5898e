//! One-time load of the trained model artifact

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use super::forest::RandomForestRegressor;
use super::linear::LinearRegressor;
use crate::domain::{Feature, Predictor};

/// Why the model artifact could not be turned into a predictor
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("model artifact not found at {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("model artifact {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("model artifact {path} is invalid: {message}")]
    Invalid { path: PathBuf, message: String },
}

/// Serialized model, tagged by its family
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    RandomForest(RandomForestRegressor),
    Linear(LinearRegressor),
}

impl ModelArtifact {
    pub fn feature_names(&self) -> &[String] {
        match self {
            Self::RandomForest(forest) => &forest.feature_names,
            Self::Linear(linear) => &linear.feature_names,
        }
    }

    /// Structural checks, including the feature-name binding
    pub fn check(&self) -> Result<(), String> {
        check_feature_names(self.feature_names())?;

        match self {
            Self::RandomForest(forest) => forest.check(),
            Self::Linear(linear) => linear.check(),
        }
    }

    /// One-line description for logs and `check-model`
    pub fn describe(&self) -> String {
        match self {
            Self::RandomForest(forest) => format!(
                "random_forest with {} trees over [{}]",
                forest.tree_count(),
                forest.feature_names.join(", ")
            ),
            Self::Linear(linear) => format!(
                "linear over [{}]",
                linear.feature_names.join(", ")
            ),
        }
    }

    pub fn into_predictor(self) -> Arc<dyn Predictor> {
        match self {
            Self::RandomForest(forest) => Arc::new(forest),
            Self::Linear(linear) => Arc::new(linear),
        }
    }
}

fn check_feature_names(names: &[String]) -> Result<(), String> {
    let expected = Feature::names();

    if names.len() != expected.len() || names.iter().zip(&expected).any(|(a, b)| a != b) {
        return Err(format!(
            "feature_names must be [{}], got [{}]",
            expected.join(", "),
            names.join(", ")
        ));
    }

    Ok(())
}

/// Read, parse and check the artifact at `path`
pub fn read_artifact(path: impl AsRef<Path>) -> Result<ModelArtifact, ModelLoadError> {
    let path = path.as_ref();

    let raw = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ModelLoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ModelLoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let artifact: ModelArtifact =
        serde_json::from_str(&raw).map_err(|source| ModelLoadError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    artifact.check().map_err(|message| ModelLoadError::Invalid {
        path: path.to_path_buf(),
        message,
    })?;

    Ok(artifact)
}

/// Load the predictor held for the lifetime of the process
pub fn load_predictor(path: impl AsRef<Path>) -> Result<Arc<dyn Predictor>, ModelLoadError> {
    let path = path.as_ref();
    let artifact = read_artifact(path)?;

    info!(path = %path.display(), model = %artifact.describe(), "Model loaded");

    Ok(artifact.into_predictor())
}
