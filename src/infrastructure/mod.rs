//! Infrastructure layer - model artifacts, outbound HTTP, logging and metrics

pub mod animation;
pub mod logging;
pub mod model;
pub mod observability;
