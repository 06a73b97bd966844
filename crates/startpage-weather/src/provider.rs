//! Open-Meteo forecast client.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::instrument;

use crate::types::{GeoPosition, WeatherError, WeatherReport};

const HOURLY_FIELDS: &str = "temperature_2m,precipitation,rain,showers,snowfall,cloud_cover";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentBlock,
    hourly: HourlyBlock,
    hourly_units: HourlyUnits,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    is_day: u8,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    temperature_2m: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct HourlyUnits {
    temperature_2m: String,
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    base_url: String,
}

impl WeatherProvider {
    /// Create a provider against `base_url` (no trailing path).
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, WeatherError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn forecast_url(&self, position: GeoPosition) -> String {
        format!(
            "{}/v1/forecast?latitude={}&longitude={}&current=is_day&hourly={}&forecast_days=1",
            self.base_url, position.latitude, position.longitude, HOURLY_FIELDS
        )
    }

    /// Fetch today's forecast and reduce it to what the page shows.
    #[instrument(skip(self), level = "debug")]
    pub async fn fetch(&self, position: GeoPosition) -> Result<WeatherReport, WeatherError> {
        let response = self.client.get(self.forecast_url(position)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status.as_u16()));
        }

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        let report = Self::report_from(body)?;
        tracing::info!("Weather fetched: {}", report.render());
        Ok(report)
    }

    fn report_from(body: ForecastResponse) -> Result<WeatherReport, WeatherError> {
        let temperature = body
            .hourly
            .temperature_2m
            .last()
            .copied()
            .ok_or(WeatherError::EmptySeries)?
            .ok_or_else(|| WeatherError::Parse("last hourly temperature is null".to_string()))?;

        Ok(WeatherReport {
            is_day: body.current.is_day != 0,
            temperature,
            unit: body.hourly_units.temperature_2m,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn forecast_body(is_day: u8, temps: &[f64]) -> serde_json::Value {
        serde_json::json!({
            "latitude": 55.0,
            "longitude": 39.0,
            "current": { "time": "2026-05-03T12:00", "interval": 900, "is_day": is_day },
            "hourly_units": { "time": "iso8601", "temperature_2m": "°C" },
            "hourly": {
                "time": ["2026-05-03T00:00", "2026-05-03T01:00", "2026-05-03T02:00"],
                "temperature_2m": temps,
            }
        })
    }

    fn provider(server: &MockServer) -> WeatherProvider {
        WeatherProvider::new(&server.uri(), Some(Duration::from_secs(5))).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_uses_last_hourly_entry() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "55"))
            .and(query_param("longitude", "39"))
            .and(query_param("current", "is_day"))
            .and(query_param("hourly", HOURLY_FIELDS))
            .and(query_param("forecast_days", "1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(forecast_body(1, &[18.0, 19.2, 21.5])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let report = provider(&mock_server)
            .fetch(GeoPosition::new(55.0, 39.0))
            .await
            .unwrap();

        assert!(report.is_day);
        assert_eq!(report.temperature, 21.5);
        assert_eq!(report.unit, "°C");
        assert_eq!(report.render(), "☀️21.5°C");
    }

    #[tokio::test]
    async fn test_fetch_night() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(0, &[4.0, 2.5])))
            .mount(&mock_server)
            .await;

        let report = provider(&mock_server)
            .fetch(GeoPosition::new(45.0, 39.0))
            .await
            .unwrap();

        assert_eq!(report.render(), "🌙2.5°C");
    }

    #[tokio::test]
    async fn test_empty_series() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(1, &[])))
            .mount(&mock_server)
            .await;

        let result = provider(&mock_server)
            .fetch(GeoPosition::new(45.0, 39.0))
            .await;

        assert!(matches!(result, Err(WeatherError::EmptySeries)));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "error": true
            })))
            .mount(&mock_server)
            .await;

        let result = provider(&mock_server)
            .fetch(GeoPosition::new(45.0, 39.0))
            .await;

        assert!(matches!(result, Err(WeatherError::Parse(_))));
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(502))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = provider(&mock_server)
            .fetch(GeoPosition::new(45.0, 39.0))
            .await;

        assert!(matches!(result, Err(WeatherError::Status(502))));
    }
}
