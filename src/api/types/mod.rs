//! API request/response types

mod error;
mod predict;

pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};
pub use predict::{FeatureValue, PredictRequest, PredictResponse};
