//! Weather and location for the start page
//!
//! Current temperature via Open-Meteo, town names via Nominatim reverse
//! geocoding, and the single cached location slot.

pub mod cache;
mod error_mapping;
pub mod geocode;
pub mod location;
pub mod provider;
pub mod store;
pub mod types;

pub use cache::{LocationCache, LOCATION_KEY};
pub use geocode::ReverseGeocoder;
pub use location::{ConfiguredGeolocator, Geolocator, UnavailableGeolocator};
pub use provider::WeatherProvider;
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use types::*;
