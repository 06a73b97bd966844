use crate::store::KeyValueStore;
use crate::types::{CachedLocation, StoreError};

/// Key of the cached location slot
pub const LOCATION_KEY: &str = "location";

/// The cached location, stored as JSON in one key-value slot.
/// Never expires; the first successful geocode wins.
pub struct LocationCache<S> {
    store: S,
}

impl<S: KeyValueStore> LocationCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the cached location. Unreadable or invalid entries are logged
    /// and reported as absent.
    pub fn load(&self) -> Option<CachedLocation> {
        let raw = match self.store.get_item(LOCATION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Failed to read cached location: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<CachedLocation>(&raw) {
            Ok(location) if location.is_valid() => Some(location),
            Ok(location) => {
                tracing::warn!("Ignoring invalid cached location: {:?}", location);
                None
            }
            Err(e) => {
                tracing::warn!("Failed to parse cached location: {}", e);
                None
            }
        }
    }

    /// Persist `location`, replacing any previous entry.
    pub fn save(&self, location: &CachedLocation) -> Result<(), StoreError> {
        let json = serde_json::to_string(location)?;
        self.store.set_item(LOCATION_KEY, &json)?;
        tracing::info!("Cached location: {}", location.town);
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
