use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;

use crate::error::PredictError;
use crate::model::{PredictionRequest, PredictionResult};

use super::PredictionProvider;

/// HTTP client for the `/auto_predict` endpoint of the prediction service.
#[derive(Debug, Clone)]
pub struct AutoPredictService {
    base_url: String,
    http: Client,
}

impl AutoPredictService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http: Client::new() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, city: &str) -> Result<PredictionResult, PredictError> {
        let url = format!("{}/auto_predict", self.base_url);
        debug!("GET {url} city={city:?}");

        let res = self.http.get(&url).query(&[("city", city)]).send().await?;

        let status = res.status();
        let body = res.text().await?;
        debug!("prediction service answered {status}, {} bytes", body.len());

        if !status.is_success() {
            return Err(PredictError::Http { status, body: truncate_body(&body) });
        }

        let parsed: Value = serde_json::from_str(&body)?;

        // Failure replies carry only an `error` field, so check it before
        // decoding the full result shape. An empty string is not a failure.
        if let Some(message) = parsed.get("error").and_then(Value::as_str) {
            if !message.is_empty() {
                return Err(PredictError::Service(message.to_string()));
            }
        }

        Ok(serde_json::from_value(parsed)?)
    }
}

#[async_trait]
impl PredictionProvider for AutoPredictService {
    async fn auto_predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, PredictError> {
        self.fetch(&request.city).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
