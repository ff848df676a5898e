//! Application configuration

mod app_config;

pub use app_config::{
    AnimationConfig, AppConfig, LogFormat, LoggingConfig, ModelConfig, ServerConfig,
};
