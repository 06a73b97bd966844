//! Device geolocation capability.

use std::future::Future;

use crate::types::{GeoPosition, LocationError};

/// Something that can report the current position once
pub trait Geolocator: Send + Sync {
    fn current_position(&self) -> impl Future<Output = Result<GeoPosition, LocationError>> + Send;
}

/// Reports a fixed position taken from configuration
#[derive(Debug, Clone, Default)]
pub struct ConfiguredGeolocator {
    position: Option<GeoPosition>,
}

impl ConfiguredGeolocator {
    pub fn new(position: Option<GeoPosition>) -> Self {
        Self { position }
    }
}

impl Geolocator for ConfiguredGeolocator {
    async fn current_position(&self) -> Result<GeoPosition, LocationError> {
        match self.position {
            Some(position) if position.is_valid() => Ok(position),
            Some(position) => Err(LocationError::Other(format!(
                "configured position out of range: {}, {}",
                position.latitude, position.longitude
            ))),
            None => Err(LocationError::ServiceUnavailable),
        }
    }
}

/// Always fails, as when the user denies the permission prompt
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableGeolocator;

impl Geolocator for UnavailableGeolocator {
    async fn current_position(&self) -> Result<GeoPosition, LocationError> {
        Err(LocationError::PermissionDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_configured_position() {
        let geo = ConfiguredGeolocator::new(Some(GeoPosition::new(45.03, 38.97)));
        assert_eq!(
            geo.current_position().await.unwrap(),
            GeoPosition::new(45.03, 38.97)
        );
    }

    #[tokio::test]
    async fn test_unconfigured_is_unavailable() {
        let geo = ConfiguredGeolocator::default();
        assert!(matches!(
            geo.current_position().await,
            Err(LocationError::ServiceUnavailable)
        ));
    }

    #[tokio::test]
    async fn test_out_of_range_position() {
        let geo = ConfiguredGeolocator::new(Some(GeoPosition::new(120.0, 0.0)));
        assert!(matches!(
            geo.current_position().await,
            Err(LocationError::Other(_))
        ));
    }

    #[tokio::test]
    async fn test_unavailable() {
        assert!(matches!(
            UnavailableGeolocator.current_position().await,
            Err(LocationError::PermissionDenied)
        ));
    }
}
