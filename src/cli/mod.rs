//! CLI module for the diabetes predictor
//!
//! Subcommands:
//! - `serve`: prediction page + JSON API
//! - `predict`: score one set of metrics and print the result
//! - `check-model`: load a model artifact and describe it

pub mod check_model;
pub mod predict;
pub mod serve;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::AppConfig;

/// Diabetes Prediction - health metrics scored by a pre-trained model
#[derive(Parser)]
#[command(name = "diabetes-predictor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Serve the prediction page and JSON API
    Serve(serve::ServeArgs),

    /// Predict once from command-line metrics
    Predict(predict::PredictArgs),

    /// Validate a model artifact without serving
    CheckModel(ModelArgs),
}

/// Model artifact selection shared by all subcommands
#[derive(Args, Clone, Debug, Default)]
pub struct ModelArgs {
    /// Path to the model artifact (overrides config)
    #[arg(long)]
    pub model: Option<PathBuf>,
}

impl ModelArgs {
    /// Apply the override to a loaded configuration
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(path) = &self.model {
            config.model.path = path.display().to_string();
        }
    }
}

/// Load `.env`, then layered configuration, with CLI overrides on top
pub fn load_config(model: &ModelArgs) -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load()?;
    model.apply(&mut config);

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::try_parse_from([
            "diabetes-predictor",
            "serve",
            "--model",
            "/srv/model.json",
            "--port",
            "9000",
        ])
        .unwrap();

        match cli.command {
            Command::Serve(args) => {
                assert_eq!(args.port, Some(9000));
                assert_eq!(args.model.model, Some(PathBuf::from("/srv/model.json")));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_model_override_applies() {
        let mut config = AppConfig::default();
        let args = ModelArgs {
            model: Some(PathBuf::from("other.json")),
        };

        args.apply(&mut config);
        assert_eq!(config.model.path, "other.json");
    }

    #[test]
    fn test_no_override_keeps_config() {
        let mut config = AppConfig::default();

        ModelArgs::default().apply(&mut config);
        assert_eq!(config.model.path, "models/random_forest.json");
    }
}
