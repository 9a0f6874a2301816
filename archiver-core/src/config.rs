use std::env;

use thiserror::Error;

/// Region used when `AWS_REGION` is not set.
pub const DEFAULT_AWS_REGION: &str = "ap-south-1";

/// A required setting was missing or empty. Fatal: the run must not reach the
/// network with a partial configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set in environment/.env")]
    Missing(&'static str),
}

/// Everything one run needs, resolved once at startup and passed down
/// explicitly instead of being read from globals.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenWeather API key.
    pub api_key: String,

    /// AWS region hosting the archive bucket.
    pub region: String,

    /// Destination bucket for archive writes.
    pub bucket: String,

    /// Cities to fetch, in the order they were configured. Duplicates are
    /// allowed.
    pub cities: Vec<String>,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary lookup. Tests inject fixtures
    /// here instead of mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = required(&lookup, "OPENWEATHER_API_KEY")?;
        let bucket = required(&lookup, "S3_BUCKET_NAME")?;
        let region = lookup("AWS_REGION").unwrap_or_else(|| DEFAULT_AWS_REGION.to_string());

        let cities = parse_cities(&lookup("CITIES").unwrap_or_default());
        if cities.is_empty() {
            return Err(ConfigError::Missing("CITIES"));
        }

        Ok(Self { api_key, region, bucket, cities })
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|value| !value.trim().is_empty()).ok_or(ConfigError::Missing(name))
}

/// Split a comma-separated city list, trimming whitespace and dropping empty
/// segments. Order and duplicates are preserved.
pub fn parse_cities(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|city| !city.is_empty()).map(str::to_owned).collect()
}
