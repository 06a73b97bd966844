//! Maps weather crate errors to startpage_core::AppError for logging.

use startpage_core::{AppError, ReqwestErrorExt, WeatherError as CoreWeatherError};

use crate::types::{GeocodeError, LocationError, StoreError, WeatherError};

impl From<WeatherError> for AppError {
    fn from(e: WeatherError) -> Self {
        match e {
            WeatherError::Network(e) => AppError::Network(e.into_network_error()),
            other => AppError::Weather(CoreWeatherError::ApiError(other.to_string())),
        }
    }
}

impl From<GeocodeError> for AppError {
    fn from(e: GeocodeError) -> Self {
        match e {
            GeocodeError::Network(e) => AppError::Network(e.into_network_error()),
            GeocodeError::NoTown => AppError::Weather(CoreWeatherError::TownNotFound(
                "no town in geocoder response".to_string(),
            )),
            other => AppError::Weather(CoreWeatherError::ApiError(other.to_string())),
        }
    }
}

impl From<LocationError> for AppError {
    fn from(e: LocationError) -> Self {
        AppError::Weather(CoreWeatherError::LocationUnavailable(e.to_string()))
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Storage(e.to_string())
    }
}
