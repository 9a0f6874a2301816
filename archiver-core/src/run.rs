use anyhow::Result;
use tracing::{error, info};

use crate::archive::Archiver;
use crate::collect::collect;
use crate::config::Config;
use crate::provider::WeatherProvider;
use crate::provider::openweather::OpenWeatherProvider;
use crate::store::s3::S3ObjectStore;

/// Outcome of one run. Partial city failures are visible only as
/// `records < cities`; they do not make the run a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Number of cities configured for the run.
    pub cities: usize,

    /// Number of observations actually collected.
    pub records: usize,

    /// Key the archive was written under; `None` for an empty run or a
    /// failed write.
    pub object_key: Option<String>,
}

/// One full run: build the collaborators from `config`, fetch every city,
/// archive the result.
pub async fn execute(config: Config) -> Result<RunReport> {
    info!("Starting weather data collection run");
    info!("Tracking cities: {}", config.cities.join(", "));

    let provider = OpenWeatherProvider::new(config.api_key)?;
    let store = S3ObjectStore::connect(config.region, config.bucket).await;
    let archiver = Archiver::new(Box::new(store));

    let report = execute_with(&config.cities, &provider, &archiver).await;

    info!("Weather data collection run completed.");
    Ok(report)
}

/// Sequencing behind [`execute`], with the collaborators injected.
pub async fn execute_with(
    cities: &[String],
    provider: &dyn WeatherProvider,
    archiver: &Archiver,
) -> RunReport {
    let records = collect(provider, cities).await;
    let collected = records.len();

    let object_key = match archiver.archive(records).await {
        Ok(key) => key,
        Err(err) => {
            error!("Failed to archive weather records: {err}");
            None
        }
    };

    RunReport { cities: cities.len(), records: collected, object_key }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WeatherObservation;
    use crate::provider::FetchError;
    use crate::store::{ObjectStore, StoreError};
    use async_trait::async_trait;
    use chrono::Utc;
    use reqwest::StatusCode;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    #[derive(Debug)]
    struct ScriptedProvider {
        failing: &'static str,
    }

    #[async_trait]
    impl WeatherProvider for ScriptedProvider {
        async fn current_weather(&self, city: &str) -> Result<WeatherObservation, FetchError> {
            if city == self.failing {
                return Err(FetchError::Status {
                    status: StatusCode::BAD_GATEWAY,
                    body: "upstream error".to_string(),
                });
            }

            Ok(WeatherObservation {
                city: city.to_string(),
                temp_f: Some(68.0),
                humidity: Some(55),
                condition: "clear sky".to_string(),
                timestamp_utc: Utc::now(),
                raw: json!({}),
            })
        }
    }

    #[derive(Debug, Clone, Default)]
    struct RecordingStore {
        puts: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl ObjectStore for RecordingStore {
        async fn put_object(
            &self,
            key: &str,
            _body: Vec<u8>,
            _content_type: &str,
        ) -> Result<(), StoreError> {
            self.puts.lock().unwrap().push(key.to_string());
            Ok(())
        }
    }

    #[derive(Debug)]
    struct BrokenStore;

    #[async_trait]
    impl ObjectStore for BrokenStore {
        async fn put_object(
            &self,
            _key: &str,
            _body: Vec<u8>,
            _content_type: &str,
        ) -> Result<(), StoreError> {
            Err(StoreError::new("simulated outage"))
        }
    }

    fn cities(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[tokio::test]
    async fn partial_failure_still_archives_the_rest() {
        let provider = ScriptedProvider { failing: "Atlantis" };
        let store = RecordingStore::default();
        let archiver = Archiver::new(Box::new(store.clone()));

        let report =
            execute_with(&cities(&["NYC", "Atlantis", "LA"]), &provider, &archiver).await;

        assert_eq!(report.cities, 3);
        assert_eq!(report.records, 2);

        let puts = store.puts.lock().unwrap();
        assert_eq!(puts.len(), 1);
        assert_eq!(report.object_key.as_deref(), Some(puts[0].as_str()));
    }

    #[tokio::test]
    async fn all_cities_failing_skips_the_write() {
        let provider = ScriptedProvider { failing: "Atlantis" };
        let store = RecordingStore::default();
        let archiver = Archiver::new(Box::new(store.clone()));

        let report = execute_with(&cities(&["Atlantis"]), &provider, &archiver).await;

        assert_eq!(report.records, 0);
        assert_eq!(report.object_key, None);
        assert!(store.puts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn archive_failure_does_not_fail_the_run() {
        let provider = ScriptedProvider { failing: "" };
        let archiver = Archiver::new(Box::new(BrokenStore));

        let report = execute_with(&cities(&["NYC"]), &provider, &archiver).await;

        assert_eq!(report.records, 1);
        assert_eq!(report.object_key, None);
    }
}
