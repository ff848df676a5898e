//! Predict command - score one set of metrics from the command line

use anyhow::Context;
use clap::Args;

use super::{load_config, ModelArgs};
use crate::domain::{HealthMetrics, PredictionService, Predictor};
use crate::infrastructure::model::load_predictor;

/// Health metrics, one flag per feature; unset flags take the form defaults
#[derive(Args, Clone, Debug)]
pub struct PredictArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub age: u32,

    #[arg(long, default_value_t = 25.0)]
    pub bmi: f64,

    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(0..=200))]
    pub glucose: u32,

    #[arg(long, default_value_t = 80, value_parser = clap::value_parser!(u32).range(0..=900))]
    pub insulin: u32,

    #[arg(long, default_value_t = 80, value_parser = clap::value_parser!(u32).range(0..=180))]
    pub blood_pressure: u32,

    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub skin_thickness: u32,

    #[arg(long, default_value_t = 0.5)]
    pub diabetes_pedigree_function: f64,
}

impl PredictArgs {
    pub fn metrics(&self) -> HealthMetrics {
        HealthMetrics {
            age: self.age,
            bmi: self.bmi,
            glucose: self.glucose,
            insulin: self.insulin,
            blood_pressure: self.blood_pressure,
            skin_thickness: self.skin_thickness,
            diabetes_pedigree_function: self.diabetes_pedigree_function,
        }
    }
}

/// Run the predict command
pub fn run(args: PredictArgs) -> anyhow::Result<()> {
    let config = load_config(&args.model)?;
    let predictor = load_predictor(&config.model.path)
        .with_context(|| format!("cannot load model '{}'", config.model.path))?;

    println!("{}", predict_line(predictor, &args.metrics())?);

    Ok(())
}

/// The line the page would show, or an error
pub fn predict_line(
    predictor: std::sync::Arc<dyn Predictor>,
    metrics: &HealthMetrics,
) -> anyhow::Result<String> {
    let service = PredictionService::new(predictor);
    let outcome = service.predict(metrics);

    if outcome.is_success() {
        Ok(outcome.message())
    } else {
        anyhow::bail!(outcome.message())
    }
}
