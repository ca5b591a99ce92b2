//! Shaky Weather Library
//!
//! Shake the device, get the weather. This library holds everything except
//! the event-loop wiring: location tracking, the shake state machine, the
//! weather fetch service, icon/asset mapping, and the display state the
//! rendering layer consumes.

#![warn(missing_docs)]

pub mod app;
pub mod display;
pub mod error;
pub mod icons;
pub mod location;
pub mod platform;
pub mod weather;

// Re-export commonly used types
pub use app::{App, Phase};
pub use display::DisplayState;
pub use error::{AppError, FetchError, FetchResult};
pub use icons::{assets_for, DisplayAssets, IconCode};
pub use location::{Coordinate, LocationTracker, LocationUpdate};
pub use platform::{sensor_channels, SensorChannels, SensorSenders, ShakeEvent};
pub use weather::{ForecastEndpoint, WeatherReading, WeatherService};
