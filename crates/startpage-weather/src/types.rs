use serde::{Deserialize, Serialize};

pub const DAY_ICON: &str = "☀️";
pub const NIGHT_ICON: &str = "🌙";

/// Position reported by the geolocation capability
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// The one persisted object: last geocoded town and its coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedLocation {
    pub town: String,
    pub lat: f64,
    pub lon: f64,
}

impl CachedLocation {
    pub fn new(town: impl Into<String>, position: GeoPosition) -> Self {
        Self {
            town: town.into(),
            lat: position.latitude,
            lon: position.longitude,
        }
    }

    pub fn position(&self) -> GeoPosition {
        GeoPosition::new(self.lat, self.lon)
    }

    /// Non-empty town and in-range coordinates
    pub fn is_valid(&self) -> bool {
        !self.town.trim().is_empty() && self.position().is_valid()
    }
}

/// What the temperature region shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub is_day: bool,
    /// Last entry of today's hourly series
    pub temperature: f64,
    pub unit: String,
}

impl WeatherReport {
    pub fn icon(&self) -> &'static str {
        if self.is_day {
            DAY_ICON
        } else {
            NIGHT_ICON
        }
    }

    /// `"<icon><temperature><unit>"`, e.g. `☀️21.5°C`
    pub fn render(&self) -> String {
        format!("{}{}{}", self.icon(), self.temperature, self.unit)
    }
}

/// Geolocation capability errors
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable")]
    ServiceUnavailable,
    #[error("Location error: {0}")]
    Other(String),
}

/// Forecast fetch errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Weather API returned status {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Hourly temperature series is empty")]
    EmptySeries,
}

/// Reverse geocoding errors
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Geocoder returned status {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("No town in geocoder response")]
    NoTown,
}

/// Key-value store errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_day() {
        let report = WeatherReport {
            is_day: true,
            temperature: 21.5,
            unit: "°C".to_string(),
        };
        let text = report.render();
        assert!(text.starts_with(DAY_ICON));
        assert!(text.ends_with("21.5°C"));
    }

    #[test]
    fn test_render_night_whole_number() {
        let report = WeatherReport {
            is_day: false,
            temperature: -3.0,
            unit: "°C".to_string(),
        };
        assert_eq!(report.render(), "🌙-3°C");
    }

    #[test]
    fn test_cached_location_json_shape() {
        let loc = CachedLocation::new("Test", GeoPosition::new(55.0, 39.0));
        let json = serde_json::to_value(&loc).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"town": "Test", "lat": 55.0, "lon": 39.0})
        );
    }

    #[test]
    fn test_cached_location_validity() {
        assert!(CachedLocation::new("Test", GeoPosition::new(55.0, 39.0)).is_valid());
        assert!(!CachedLocation::new("  ", GeoPosition::new(55.0, 39.0)).is_valid());
        assert!(!CachedLocation::new("Test", GeoPosition::new(95.0, 39.0)).is_valid());
        assert!(!CachedLocation::new("Test", GeoPosition::new(55.0, f64::NAN)).is_valid());
    }
}
