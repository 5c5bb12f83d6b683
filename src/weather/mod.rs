//! Weather readings and the displays observing them.

pub mod display;
pub mod snapshot;
pub mod subject;

pub use display::{ConditionsDisplay, DisplayKind, DisplayRef, ForecastDisplay, TemperatureDisplay, WeatherDisplay};
pub use snapshot::WeatherSnapshot;
pub use subject::{WeatherData, WeatherSubject};
