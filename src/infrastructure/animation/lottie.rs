use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{Animation, AnimationSource};
use crate::infrastructure::observability::record_animation_fetch;

/// Fetches a Lottie animation descriptor over HTTP
#[derive(Debug, Clone)]
pub struct LottieFetcher {
    client: reqwest::Client,
    url: String,
}

impl LottieFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Build a fetcher whose requests give up after `timeout`
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: reqwest::Client::builder().timeout(timeout).build()?,
            url: url.into(),
        })
    }

    async fn try_fetch(&self) -> Result<Value, FetchFailure> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchFailure::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchFailure::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchFailure::Body(e.to_string()))
    }
}

#[derive(Debug)]
enum FetchFailure {
    Transport(String),
    Status(u16),
    Body(String),
}

impl FetchFailure {
    fn label(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport_error",
            Self::Status(_) => "bad_status",
            Self::Body(_) => "malformed_body",
        }
    }
}

#[async_trait]
impl AnimationSource for LottieFetcher {
    async fn fetch(&self) -> Option<Animation> {
        match self.try_fetch().await {
            Ok(document) => {
                debug!(url = %self.url, "Animation fetched");
                record_animation_fetch("ok");
                Some(Animation::new(document))
            }
            Err(failure) => {
                warn!(url = %self.url, reason = ?failure, "Animation unavailable");
                record_animation_fetch(failure.label());
                None
            }
        }
    }
}
