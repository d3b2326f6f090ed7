use std::fmt::Debug;

use async_trait::async_trait;

use crate::{Config, PredictError, PredictionRequest, PredictionResult};

pub mod auto_predict;

pub use auto_predict::AutoPredictService;

/// Abstraction over the remote prediction endpoint.
///
/// There is one production implementation ([`AutoPredictService`]); the
/// trait exists so session logic can be exercised against a mock service.
#[async_trait]
pub trait PredictionProvider: Send + Sync + Debug {
    /// Fetch a prediction for the requested city.
    ///
    /// Callers must not pass an empty city; presence is validated where the
    /// input is collected.
    async fn auto_predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, PredictError>;
}

/// Construct the production provider from config.
pub fn provider_from_config(config: &Config) -> AutoPredictService {
    AutoPredictService::new(config.service.base_url.clone())
}
