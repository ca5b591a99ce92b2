//! Icon codes and display-asset mapping
//!
//! The forecast API describes current conditions with a small string
//! vocabulary ("clear-day", "rain", ...). Every code resolves to exactly one
//! foreground/background asset pair, with anything unrecognized falling back
//! to the clear-day pair. This table is the only domain invariant the app
//! owns, so it lives in one place and stays total.

/// Condition codes as reported by the forecast API's `currently.icon` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconCode {
    /// "clear-day"
    ClearDay,
    /// "clear-night"
    ClearNight,
    /// "rain"
    Rain,
    /// "snow"
    Snow,
    /// "sleet"
    Sleet,
    /// "wind"
    Wind,
    /// "fog"
    Fog,
    /// "cloudy"
    Cloudy,
    /// "partly-cloudy-day"
    PartlyCloudyDay,
    /// "partly-cloudy-night"
    PartlyCloudyNight,
    /// Anything outside the documented vocabulary
    Unknown,
}

impl IconCode {
    /// Parse an API icon string. Total: unrecognized codes become `Unknown`.
    pub fn from_api(code: &str) -> Self {
        match code {
            "clear-day" => Self::ClearDay,
            "clear-night" => Self::ClearNight,
            "rain" => Self::Rain,
            "snow" => Self::Snow,
            "sleet" => Self::Sleet,
            "wind" => Self::Wind,
            "fog" => Self::Fog,
            "cloudy" => Self::Cloudy,
            "partly-cloudy-day" => Self::PartlyCloudyDay,
            "partly-cloudy-night" => Self::PartlyCloudyNight,
            _ => Self::Unknown,
        }
    }
}

/// A foreground icon plus background image, by asset identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayAssets {
    /// Foreground icon asset
    pub icon: &'static str,
    /// Full-screen background asset
    pub background: &'static str,
}

const SUN: DisplayAssets = DisplayAssets {
    icon: "sun",
    background: "sun_stock",
};

const MOON: DisplayAssets = DisplayAssets {
    icon: "moon",
    background: "moon_stock",
};

const RAIN: DisplayAssets = DisplayAssets {
    icon: "rain",
    background: "rain_stock",
};

const SNOW: DisplayAssets = DisplayAssets {
    icon: "snow",
    background: "snow_stock",
};

const CLOUDY: DisplayAssets = DisplayAssets {
    icon: "cloudy",
    background: "cloudy_stock",
};

/// Map a condition code to its asset pair.
///
/// Pure and total. Several codes share the cloudy pair, snow and sleet share
/// the snow pair, and `Unknown` gets the clear-day (sun) pair.
pub fn assets_for(code: IconCode) -> DisplayAssets {
    match code {
        IconCode::ClearDay | IconCode::Unknown => SUN,
        IconCode::ClearNight => MOON,
        IconCode::Rain => RAIN,
        IconCode::Snow | IconCode::Sleet => SNOW,
        IconCode::Wind
        | IconCode::Fog
        | IconCode::Cloudy
        | IconCode::PartlyCloudyDay
        | IconCode::PartlyCloudyNight => CLOUDY,
    }
}
