//! Check-model command - load an artifact and describe it

use anyhow::Context;

use super::{load_config, ModelArgs};
use crate::domain::HealthMetrics;
use crate::infrastructure::model::read_artifact;

/// Run the check-model command
pub fn run(args: ModelArgs) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    let report = check(&config.model.path)?;

    println!("{}", report);

    Ok(())
}

/// Load the artifact, score the default inputs, and summarize
pub fn check(path: &str) -> anyhow::Result<String> {
    let artifact = read_artifact(path).with_context(|| format!("model '{}' is unusable", path))?;
    let description = artifact.describe();

    let predictor = artifact.into_predictor();
    let score = predictor
        .predict(&HealthMetrics::default().to_feature_vector())
        .with_context(|| format!("model '{}' failed to score the default inputs", path))?;

    Ok(format!(
        "{}: {}\ndefault inputs score {:.2}",
        path, description, score
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_model_is_valid() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/models/random_forest.json");

        let report = check(path).unwrap();
        assert!(report.contains("random_forest with"));
        assert!(report.contains("default inputs score"));
    }

    #[test]
    fn test_missing_model_reports_path() {
        let err = check("/nonexistent/model.json").unwrap_err();

        let chain = format!("{:#}", err);
        assert!(chain.contains("model '/nonexistent/model.json' is unusable"));
        assert!(chain.contains("not found"));
    }
}
