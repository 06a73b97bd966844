pub mod app;
pub mod component;
pub mod config;
pub mod error;
pub mod event;

pub use app::{App, EventHandler};
pub use component::{Component, ComponentContext};
pub use config::{
    BackgroundConfig, ClockConfig, Config, GeocodeConfig, LocationConfig, NetworkConfig,
    ValidationResult, WeatherConfig,
};
pub use error::{AppError, NetworkError, ReqwestErrorExt, TaskError, WeatherError};
pub use event::{EventSender, PageEvent, Region, TaskCommand};

use anyhow::Result;

/// Initialize logging. Output goes to stderr so the rendered page owns stdout.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Startpage core initialized");
    Ok(())
}
