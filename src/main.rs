use anyhow::Result;
use startpage_core::{App, Config};
use startpage_ui::models::Page;
use startpage_ui::render::Screen;
use startpage_ui::services::{
    BackgroundComponent, ClockComponent, LocationWeather, TaskInputComponent, WeatherComponent,
};
use startpage_weather::{ConfiguredGeolocator, FileStore, GeoPosition};

#[tokio::main]
async fn main() -> Result<()> {
    startpage_core::init()?;

    let (config, _) = Config::load_validated()?;
    tracing::info!("Config directory: {}", config.config_dir.display());

    let store = FileStore::in_dir(&config.config_dir);
    let geolocator = ConfiguredGeolocator::new(
        config
            .location
            .position()
            .map(|(lat, lon)| GeoPosition::new(lat, lon)),
    );
    let weather = LocationWeather::from_config(&config, geolocator, store)?;
    let page = Page::new(config.location.default_town.clone());

    let mut app = App::new(config);
    app.register_component(Box::new(ClockComponent::new()));
    app.register_component(Box::new(BackgroundComponent::new()));
    app.register_component(Box::new(WeatherComponent::new(weather)));
    app.register_component(Box::new(TaskInputComponent::stdin()));
    app.initialize()?;

    tracing::info!("Startpage started");

    let mut screen = Screen::new(page, std::io::stdout());
    tokio::select! {
        _ = app.run(&mut screen) => {}
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
            }
        }
    }

    // Graceful shutdown
    app.shutdown()?;
    println!();

    Ok(())
}
