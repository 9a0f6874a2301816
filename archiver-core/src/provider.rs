use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::model::WeatherObservation;

pub mod openweather;

/// Failure of a single fetch attempt. There is no retry at any layer; the
/// caller decides whether to skip the city or abort.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection error or request timeout.
    #[error("request to weather provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider answered with a non-2xx status.
    #[error("weather provider request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Provider answered 2xx but the body was not JSON.
    #[error("weather provider returned a non-JSON body: {0}")]
    Decode(serde_json::Error),

    /// Body was JSON but a section had the wrong shape. Carries the raw
    /// payload so the skip log can show what the provider actually sent.
    #[error("unexpected weather data format: {source} | raw={raw}")]
    Shape {
        source: serde_json::Error,
        raw: Value,
    },
}

/// Capability interface over the weather provider, so the driver and the run
/// orchestrator are testable without network access.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch and normalize the current weather observation for one city.
    async fn current_weather(&self, city: &str) -> Result<WeatherObservation, FetchError>;
}
