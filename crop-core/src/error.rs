use reqwest::StatusCode;
use thiserror::Error;

/// Every outcome class of a prediction attempt, one variant per failure.
///
/// `EmptyCity` is the validation failure, `Service` is a logical failure
/// reported inside a successful transport reply, and the remaining variants
/// are transport-class: the request never produced a decodable prediction.
#[derive(Debug, Error)]
pub enum PredictError {
    /// A prediction was triggered without a city.
    #[error("Please enter a city!")]
    EmptyCity,

    /// The service answered, but reported a failure in its `error` field.
    #[error("{0}")]
    Service(String),

    /// The request never completed (connection refused, timeout, ...).
    #[error("failed to reach the prediction service")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status.
    #[error("prediction service returned status {status}: {body}")]
    Http { status: StatusCode, body: String },

    /// The response body was not valid prediction JSON.
    #[error("failed to decode the prediction response")]
    Decode(#[from] serde_json::Error),
}

impl PredictError {
    /// True for the variants the user can fix by changing their input:
    /// validation and service-reported failures.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, PredictError::EmptyCity | PredictError::Service(_))
    }
}
