//! Reverse geocoding: convert coordinates to a town name.
//! Uses Nominatim (OpenStreetMap) - free, no API key required.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::instrument;

use crate::types::{GeoPosition, GeocodeError};

#[derive(Debug, Deserialize)]
struct NominatimResponse {
    address: Option<NominatimAddress>,
}

#[derive(Debug, Deserialize)]
struct NominatimAddress {
    town: Option<String>,
    city: Option<String>,
    village: Option<String>,
    municipality: Option<String>,
}

impl NominatimAddress {
    /// Prefer town > city > village > municipality, skipping blanks
    fn place_name(self) -> Option<String> {
        [self.town, self.city, self.village, self.municipality]
            .into_iter()
            .flatten()
            .map(|s| s.trim().to_string())
            .find(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct ReverseGeocoder {
    client: Client,
    base_url: String,
}

impl ReverseGeocoder {
    /// Nominatim's usage policy requires an identifying `user_agent`.
    pub fn new(
        base_url: &str,
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, GeocodeError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Look up the town at `position`.
    #[instrument(skip(self), level = "debug")]
    pub async fn town(&self, position: GeoPosition) -> Result<String, GeocodeError> {
        let url = format!(
            "{}/reverse?format=json&lat={}&lon={}&zoom=18&addressdetails=1",
            self.base_url, position.latitude, position.longitude
        );

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Reverse geocode returned status {}", status);
            return Err(GeocodeError::Status(status.as_u16()));
        }

        let body: NominatimResponse = response
            .json()
            .await
            .map_err(|e| GeocodeError::Parse(e.to_string()))?;

        let town = body
            .address
            .and_then(NominatimAddress::place_name)
            .ok_or(GeocodeError::NoTown)?;

        tracing::info!("Reverse geocoded to: {}", town);
        Ok(town)
    }
}
