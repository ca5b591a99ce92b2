//! Application state and the shake state machine
//!
//! Two observable phases: [`Phase::AwaitingShake`] (prompt up, nothing else
//! on screen) and [`Phase::DisplayingWeather`]. The second is terminal for
//! the session; repeated shakes re-fetch but never bring the prompt back.
//!
//! The handlers here run on the event-loop thread and do no I/O themselves:
//! a shake yields the coordinate a fetch should be issued for, and the loop
//! wiring owns the actual request.

use tracing::{debug, info, warn};

use crate::display::DisplayState;
use crate::error::FetchResult;
use crate::location::{Coordinate, LocationTracker, LocationUpdate};
use crate::weather::WeatherReading;

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Initial: shake prompt visible, no weather shown yet
    AwaitingShake,
    /// Weather on screen. Terminal until app restart.
    DisplayingWeather,
}

/// Application state owned by the main event loop
#[derive(Debug, Default)]
pub struct App {
    tracker: LocationTracker,
    display: DisplayState,
    phase: Phase,
}

impl Default for Phase {
    fn default() -> Self {
        Self::AwaitingShake
    }
}

impl App {
    /// App in `AwaitingShake` with no location
    pub fn new() -> Self {
        Self::default()
    }

    /// Location batch from the platform. Keeps the newest point only.
    pub fn handle_location_update(&mut self, batch: &[LocationUpdate]) {
        self.tracker.apply(batch);
    }

    /// Shake gesture from the platform.
    ///
    /// Returns the coordinate a fetch should be issued for, or `None` when
    /// no location has arrived yet; in that case the shake is dropped
    /// silently and the prompt stays up. No queuing, no user feedback.
    pub fn handle_shake(&mut self) -> Option<Coordinate> {
        match self.tracker.coordinate() {
            Some(coordinate) => {
                debug!(
                    lat = coordinate.latitude,
                    lon = coordinate.longitude,
                    "Shake accepted, requesting weather"
                );
                Some(coordinate)
            }
            None => {
                debug!("Shake ignored, no location known yet");
                None
            }
        }
    }

    /// Completed fetch, marshaled back onto the loop thread.
    ///
    /// A success writes the display and moves to `DisplayingWeather`. A
    /// failure mutates nothing user-visible; it is logged and dropped,
    /// which preserves the product behavior of showing no error state.
    pub fn handle_fetch_result(&mut self, result: FetchResult<WeatherReading>) {
        match result {
            Ok(reading) => {
                info!(
                    summary = %reading.summary,
                    temperature = reading.temperature_f,
                    "Displaying weather"
                );
                self.display.apply_reading(&reading);
                self.phase = Phase::DisplayingWeather;
            }
            Err(e) => {
                warn!(error = %e, "Discarding failed fetch, display unchanged");
            }
        }
    }

    /// Current session phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current display state
    pub fn display(&self) -> &DisplayState {
        &self.display
    }
}
