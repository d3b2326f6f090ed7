use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single prediction query. The city is carried exactly as the user
/// entered it; percent-encoding happens at the transport layer.
#[derive(Debug, Clone)]
pub struct PredictionRequest {
    pub city: String,
}

impl PredictionRequest {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }
}

/// Payload returned by the prediction service.
///
/// The service applies no schema of its own, so every field is lenient:
/// when it finds no dish for the predicted crop it answers with only
/// `crop`, a null `dish` and a null `nutrition`. Unknown extra fields
/// (`lat`, `lon`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionResult {
    pub city: String,
    pub crop: String,
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "P")]
    pub p: f64,
    #[serde(rename = "K")]
    pub k: f64,
    pub ph: f64,
    pub dish: Option<String>,
    pub ingredients: Vec<String>,
    /// Nutrient name -> value, in the exact order the service sent them.
    pub nutrition: Option<Map<String, Value>>,
    /// Populated only on logical failures; the provider turns such replies
    /// into [`PredictError::Service`](crate::PredictError::Service) before
    /// a result is ever built.
    pub error: Option<String>,
}
