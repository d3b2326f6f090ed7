use anyhow::Result;
use crop_core::{PredictError, PredictionProvider, PredictionRequest, PredictionResult};
use inquire::{InquireError, Text};
use log::warn;

use crate::view::Panel;

/// Outcome of one predict trigger.
#[derive(Debug)]
pub enum Outcome {
    /// A fresh prediction replaced the displayed result.
    Updated,
    /// The attempt was rejected before the request, or the service reported
    /// a failure; the displayed result is untouched.
    Notice(String),
    /// Transport-class failure; the displayed result is untouched.
    Failed(PredictError),
}

/// The predictor's two pieces of state: the current city input and the
/// last fetched result.
#[derive(Debug, Default)]
pub struct PredictorSession {
    city: String,
    data: Option<PredictionResult>,
}

impl PredictorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored city with the entered text, verbatim.
    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    /// Last successfully fetched prediction, if any.
    pub fn data(&self) -> Option<&PredictionResult> {
        self.data.as_ref()
    }

    /// Trigger one prediction for the stored city.
    ///
    /// An empty city is rejected before any request is issued. The stored
    /// result is replaced only on success; every failure leaves it
    /// untouched.
    pub async fn predict(&mut self, provider: &dyn PredictionProvider) -> Outcome {
        if self.city.is_empty() {
            return Outcome::Notice(PredictError::EmptyCity.to_string());
        }

        let request = PredictionRequest::new(self.city.clone());
        match provider.auto_predict(&request).await {
            Ok(result) => {
                self.data = Some(result);
                Outcome::Updated
            }
            Err(PredictError::Service(message)) => Outcome::Notice(message),
            Err(err) => Outcome::Failed(err),
        }
    }
}

/// Run the interactive predictor until the prompt is cancelled.
pub async fn run_interactive(provider: &dyn PredictionProvider) -> Result<()> {
    println!("🌱 Auto Crop Predictor");

    let mut session = PredictorSession::new();

    loop {
        let city = match Text::new("City")
            .with_placeholder("Enter city name")
            .with_help_message("Esc to quit")
            .prompt()
        {
            Ok(city) => city,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        session.set_city(city);
        let outcome = session.predict(provider).await;
        report(outcome, &session);
    }

    Ok(())
}

/// Predict once for a city given on the command line.
pub async fn run_once(provider: &dyn PredictionProvider, city: String) -> Result<()> {
    let mut session = PredictorSession::new();
    session.set_city(city);

    match session.predict(provider).await {
        Outcome::Updated => {
            if let Some(result) = session.data() {
                print!("{}", Panel(result));
            }
            Ok(())
        }
        Outcome::Notice(message) => Err(anyhow::anyhow!(message)),
        Outcome::Failed(err) => Err(err.into()),
    }
}

fn report(outcome: Outcome, session: &PredictorSession) {
    match outcome {
        Outcome::Updated => {
            if let Some(result) = session.data() {
                println!();
                print!("{}", Panel(result));
            }
        }
        Outcome::Notice(message) => eprintln!("{message}"),
        Outcome::Failed(err) => {
            warn!("prediction attempt failed: {err}");
            eprintln!("error: {:#}", anyhow::Error::from(err));
        }
    }
}
