use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::warn;

use crate::model::{ArchiveDocument, WeatherObservation};
use crate::store::{ObjectStore, StoreError};

const ARCHIVE_CONTENT_TYPE: &str = "application/json";

/// The archive write failed. The run does not retry and does not buffer the
/// document; data not written is lost at process exit.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("failed to serialize archive document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Storage key for a run archived at `now`. The date path and the filename
/// suffix come from the same timestamp.
pub fn object_key(now: DateTime<Utc>) -> String {
    let date_path = now.format("%Y/%m/%d");
    let stamp = now.format("%Y%m%d-%H%M%S");

    format!("weather-data/{date_path}/weather-{stamp}.json")
}

/// Writes one run's records to the object store as a single JSON document.
#[derive(Debug)]
pub struct Archiver {
    store: Box<dyn ObjectStore>,
}

impl Archiver {
    pub fn new(store: Box<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Archive `records` under a key derived from the current time.
    ///
    /// Returns the object key, or `None` when there was nothing to write.
    pub async fn archive(
        &self,
        records: Vec<WeatherObservation>,
    ) -> Result<Option<String>, ArchiveError> {
        self.archive_at(Utc::now(), records).await
    }

    /// Clock-injected variant of [`archive`](Self::archive).
    pub async fn archive_at(
        &self,
        now: DateTime<Utc>,
        records: Vec<WeatherObservation>,
    ) -> Result<Option<String>, ArchiveError> {
        if records.is_empty() {
            warn!("No weather data to upload.");
            return Ok(None);
        }

        let key = object_key(now);
        let document = ArchiveDocument::new(now, records);
        let body = serde_json::to_string_pretty(&document)?;

        self.store.put_object(&key, body.into_bytes(), ARCHIVE_CONTENT_TYPE).await?;

        Ok(Some(key))
    }
}
