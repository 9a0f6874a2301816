use tracing::{info, warn};

use crate::model::WeatherObservation;
use crate::provider::WeatherProvider;

/// Fetch weather for every configured city, sequentially and in input order.
///
/// A failing city is logged and skipped; it never aborts the run. The result
/// may be empty if every city failed, which is a valid outcome and not an
/// error.
pub async fn collect(provider: &dyn WeatherProvider, cities: &[String]) -> Vec<WeatherObservation> {
    let mut records = Vec::with_capacity(cities.len());

    for city in cities {
        info!("Fetching weather for: {city}");

        match provider.current_weather(city).await {
            Ok(record) => {
                info!("{city}: {}", record.summary());
                records.push(record);
            }
            Err(err) => {
                warn!("Skipping city due to error: {city} ({err})");
            }
        }
    }

    records
}
