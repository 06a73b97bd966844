//! Location and weather: one resolution per run, results sent as page events.
//! Failures are logged and leave the affected region as it was.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use startpage_core::{AppError, Component, ComponentContext, Config, EventSender, Region};
use startpage_weather::{
    CachedLocation, GeoPosition, Geolocator, KeyValueStore, LocationCache, ReverseGeocoder,
    WeatherProvider,
};
use tokio::task::JoinHandle;

/// Everything one resolution needs
pub struct LocationWeather<G, S> {
    geolocator: G,
    cache: LocationCache<S>,
    provider: WeatherProvider,
    geocoder: ReverseGeocoder,
}

impl<G: Geolocator, S: KeyValueStore> LocationWeather<G, S> {
    pub fn new(
        geolocator: G,
        cache: LocationCache<S>,
        provider: WeatherProvider,
        geocoder: ReverseGeocoder,
    ) -> Self {
        Self {
            geolocator,
            cache,
            provider,
            geocoder,
        }
    }

    /// Build clients from configuration
    pub fn from_config(config: &Config, geolocator: G, store: S) -> Result<Self> {
        let timeout = match config.network.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        let provider = WeatherProvider::new(&config.weather.base_url, timeout)
            .map_err(AppError::from)?;
        let geocoder =
            ReverseGeocoder::new(&config.geocode.base_url, &config.geocode.user_agent, timeout)
                .map_err(AppError::from)?;

        Ok(Self::new(
            geolocator,
            LocationCache::new(store),
            provider,
            geocoder,
        ))
    }

    /// Cached location: show its town and fetch weather for it.
    /// Otherwise geolocate, then fetch weather and geocode concurrently.
    pub async fn run(&self, events: &EventSender) {
        if let Some(cached) = self.cache.load() {
            tracing::info!("Using cached location: {}", cached.town);
            events.set_text(Region::Location, cached.town.clone());
            self.update_weather(cached.position(), events).await;
            return;
        }

        let position = match self.geolocator.current_position().await {
            Ok(position) => {
                tracing::info!(
                    "Got location: {}, {}",
                    position.latitude,
                    position.longitude
                );
                position
            }
            Err(e) => {
                tracing::warn!("{}", AppError::from(e));
                return;
            }
        };

        tokio::join!(
            self.update_weather(position, events),
            self.update_location(position, events)
        );
    }

    async fn update_weather(&self, position: GeoPosition, events: &EventSender) {
        match self.provider.fetch(position).await {
            Ok(report) => {
                events.set_text(Region::Temperature, report.render());
            }
            Err(e) => tracing::warn!("{}", AppError::from(e)),
        }
    }

    async fn update_location(&self, position: GeoPosition, events: &EventSender) {
        let town = match self.geocoder.town(position).await {
            Ok(town) => town,
            Err(e) => {
                tracing::warn!("{}", AppError::from(e));
                return;
            }
        };

        if let Err(e) = self.cache.save(&CachedLocation::new(town.clone(), position)) {
            tracing::warn!("{}", AppError::from(e));
        }
        events.set_text(Region::Location, town);
    }
}

pub struct WeatherComponent<G, S> {
    job: Arc<LocationWeather<G, S>>,
    handle: Option<JoinHandle<()>>,
}

impl<G, S> WeatherComponent<G, S>
where
    G: Geolocator + 'static,
    S: KeyValueStore + 'static,
{
    pub fn new(job: LocationWeather<G, S>) -> Self {
        Self {
            job: Arc::new(job),
            handle: None,
        }
    }
}

impl<G, S> Component for WeatherComponent<G, S>
where
    G: Geolocator + 'static,
    S: KeyValueStore + 'static,
{
    fn id(&self) -> &str {
        "weather"
    }

    fn name(&self) -> &str {
        "Location & Weather"
    }

    fn start(&mut self, ctx: &ComponentContext) -> Result<()> {
        let job = self.job.clone();
        let events = ctx.events.clone();
        self.handle = Some(tokio::spawn(async move { job.run(&events).await }));
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        Ok(())
    }
}
