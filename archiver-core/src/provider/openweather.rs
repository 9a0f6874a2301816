use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::model::WeatherObservation;

use super::{FetchError, WeatherProvider};

const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, OPENWEATHER_BASE_URL.to_string())
    }

    /// Same as [`new`](Self::new) against a custom endpoint. Tests point this
    /// at a local mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to construct HTTP client for OpenWeather")?;

        Ok(Self { api_key, base_url, http })
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherObservation, FetchError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "imperial"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        let raw: Value = serde_json::from_str(&body).map_err(FetchError::Decode)?;
        normalize(city, raw)
    }
}

#[derive(Debug, Default, Deserialize)]
struct OwMain {
    temp: Option<f64>,
    humidity: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: Option<OwMain>,
    weather: Option<Vec<OwWeather>>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherObservation, FetchError> {
        self.fetch_current(city).await
    }
}

/// Build an observation out of a raw provider payload, keeping the payload
/// itself on the record. An absent `main` section or absent sub-fields are
/// tolerated; a section with the wrong shape is not.
fn normalize(city: &str, raw: Value) -> Result<WeatherObservation, FetchError> {
    let parsed: OwCurrentResponse = serde_json::from_value(raw.clone())
        .map_err(|source| FetchError::Shape { source, raw: raw.clone() })?;

    let condition = parsed
        .weather
        .unwrap_or_default()
        .into_iter()
        .next()
        .map(|w| w.description)
        .unwrap_or_else(|| "unknown".to_string());

    let main = parsed.main.unwrap_or_default();

    Ok(WeatherObservation {
        city: city.to_string(),
        temp_f: main.temp,
        humidity: main.humidity,
        condition,
        timestamp_utc: Utc::now(),
        raw,
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
