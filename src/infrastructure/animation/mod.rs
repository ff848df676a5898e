//! Outbound fetch of the decorative animation

mod lottie;

use std::sync::Arc;
use std::time::Duration;

pub use lottie::LottieFetcher;

use crate::config::AnimationConfig;
use crate::domain::{AnimationSource, DisabledAnimation};

/// Build the animation source described by the configuration
pub fn create_animation_source(
    config: &AnimationConfig,
) -> Result<Arc<dyn AnimationSource>, reqwest::Error> {
    if !config.enabled {
        tracing::info!("Animation disabled");
        return Ok(Arc::new(DisabledAnimation));
    }

    let fetcher =
        LottieFetcher::with_timeout(&config.url, Duration::from_secs(config.timeout_secs))?;
    Ok(Arc::new(fetcher))
}
