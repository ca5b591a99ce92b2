//! Display state for the single screen
//!
//! No pixels here: these values are what a rendering layer would consume,
//! and writing them is this crate's output contract. The shake prompt is
//! one-shot by design; once the first reading lands it never comes back
//! within a session.

use crate::icons::{assets_for, DisplayAssets};
use crate::weather::WeatherReading;

/// Everything the screen shows
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    /// Foreground weather icon asset, unset until the first reading
    pub icon: Option<&'static str>,
    /// Background image asset, unset until the first reading
    pub background: Option<&'static str>,
    /// Temperature label, e.g. "72.5F"
    pub temperature_text: Option<String>,
    /// Summary label, verbatim API text
    pub summary_text: Option<String>,
    /// "Shake me" indicator; visible until the first successful display,
    /// then hidden for the rest of the session
    pub shake_prompt_visible: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            icon: None,
            background: None,
            temperature_text: None,
            summary_text: None,
            shake_prompt_visible: true,
        }
    }
}

impl DisplayState {
    /// Fresh screen: no weather yet, prompt showing
    pub fn new() -> Self {
        Self::default()
    }

    /// Write all four display fields from a reading and retire the shake
    /// prompt.
    ///
    /// The temperature uses native float formatting with an "F" suffix, no
    /// rounding: 72.5 renders as "72.5F".
    pub fn apply_reading(&mut self, reading: &WeatherReading) {
        let DisplayAssets { icon, background } = assets_for(reading.icon);
        self.icon = Some(icon);
        self.background = Some(background);
        self.summary_text = Some(reading.summary.clone());
        self.temperature_text = Some(format!("{}F", reading.temperature_f));
        self.shake_prompt_visible = false;
    }
}
