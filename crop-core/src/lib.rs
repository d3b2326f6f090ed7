//! Core library for the `crop` prediction client.
//!
//! This crate defines:
//! - Configuration for the prediction service endpoint
//! - Shared domain models (requests, results)
//! - The error taxonomy for prediction attempts
//! - The provider abstraction and the HTTP client for `/auto_predict`
//!
//! It is used by `crop-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use config::{Config, ServiceConfig};
pub use error::PredictError;
pub use model::{PredictionRequest, PredictionResult};
pub use provider::{AutoPredictService, PredictionProvider};
