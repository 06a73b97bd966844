pub mod background_service;
pub mod clock_service;
pub mod task_input;
pub mod weather_service;

pub use background_service::{BackgroundComponent, HourFn};
pub use clock_service::{ClockComponent, NowFn};
pub use task_input::{parse_line, TaskInputComponent};
pub use weather_service::{LocationWeather, WeatherComponent};
