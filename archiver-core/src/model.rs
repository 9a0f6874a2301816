use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One city's normalized weather snapshot for a run.
///
/// Field names are the archive wire format. Records are never mutated after
/// construction; they are included in exactly one [`ArchiveDocument`] or
/// discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// City name as configured, not as reported by the provider.
    pub city: String,

    /// Temperature in degrees Fahrenheit, when the provider reported one.
    pub temp_f: Option<f64>,

    /// Relative humidity percent, when the provider reported one.
    pub humidity: Option<i64>,

    /// Human-readable condition; `"unknown"` when the provider returned no
    /// weather entries.
    pub condition: String,

    /// When this record was constructed, not the provider's observation time.
    pub timestamp_utc: DateTime<Utc>,

    /// Complete, unmodified provider response, kept for audit and debugging.
    pub raw: Value,
}

impl WeatherObservation {
    /// One-line temperature/humidity/condition summary for log output.
    pub fn summary(&self) -> String {
        let temp = match self.temp_f {
            Some(t) => t.to_string(),
            None => "n/a".to_string(),
        };
        let humidity = match self.humidity {
            Some(h) => h.to_string(),
            None => "n/a".to_string(),
        };

        format!("{temp}°F, Humidity {humidity}%, Condition: {}", self.condition)
    }
}

/// The single JSON document persisted per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveDocument {
    pub generated_at_utc: DateTime<Utc>,
    pub record_count: usize,
    pub records: Vec<WeatherObservation>,
}

impl ArchiveDocument {
    pub fn new(generated_at_utc: DateTime<Utc>, records: Vec<WeatherObservation>) -> Self {
        Self { generated_at_utc, record_count: records.len(), records }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn observation(city: &str) -> WeatherObservation {
        WeatherObservation {
            city: city.to_string(),
            temp_f: Some(72.5),
            humidity: Some(40),
            condition: "clear sky".to_string(),
            timestamp_utc: Utc.with_ymd_and_hms(2024, 3, 5, 7, 0, 0).unwrap(),
            raw: json!({"main": {"temp": 72.5, "humidity": 40}}),
        }
    }

    #[test]
    fn summary_formats_populated_fields() {
        assert_eq!(observation("NYC").summary(), "72.5°F, Humidity 40%, Condition: clear sky");
    }

    #[test]
    fn summary_marks_absent_fields() {
        let record = WeatherObservation {
            temp_f: None,
            humidity: None,
            condition: "unknown".to_string(),
            ..observation("NYC")
        };

        assert_eq!(record.summary(), "n/a°F, Humidity n/a%, Condition: unknown");
    }

    #[test]
    fn observation_serializes_with_wire_field_names() {
        let value = serde_json::to_value(observation("NYC")).expect("observation must serialize");

        for field in ["city", "temp_f", "humidity", "condition", "timestamp_utc", "raw"] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
    }

    #[test]
    fn archive_document_round_trips() {
        let generated = Utc.with_ymd_and_hms(2024, 3, 5, 7, 9, 11).unwrap();
        let records = vec![observation("NYC"), observation("LA")];
        let document = ArchiveDocument::new(generated, records.clone());

        let body = serde_json::to_string_pretty(&document).expect("document must serialize");
        let parsed: ArchiveDocument = serde_json::from_str(&body).expect("document must parse back");

        assert_eq!(parsed.record_count, parsed.records.len());
        assert_eq!(parsed.generated_at_utc, generated);
        assert_eq!(parsed.records, records);
    }

    #[test]
    fn record_count_matches_records() {
        let document = ArchiveDocument::new(Utc::now(), vec![observation("NYC")]);
        assert_eq!(document.record_count, 1);
    }
}
