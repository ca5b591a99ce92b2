//! Last-known-location tracking
//!
//! The platform pushes location updates at whatever rate it likes; all this
//! module does is keep the newest point. Permission denial or an unavailable
//! location service just means no update ever arrives and the coordinate
//! stays absent.

use chrono::{DateTime, Utc};

/// A latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Degrees latitude
    pub latitude: f64,
    /// Degrees longitude
    pub longitude: f64,
}

/// A single location event as delivered by the platform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationUpdate {
    /// Degrees latitude
    pub latitude: f64,
    /// Degrees longitude
    pub longitude: f64,
    /// When the platform produced the fix. Carried but not used.
    pub timestamp: DateTime<Utc>,
}

impl LocationUpdate {
    /// The point this update reports
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Stores the most recent coordinate delivered by the platform.
///
/// Updates and reads both happen on the event-loop thread, so there is no
/// locking. No history is kept.
#[derive(Debug, Default)]
pub struct LocationTracker {
    current: Option<Coordinate>,
}

impl LocationTracker {
    /// Tracker with no location yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a batch of updates, keeping only the last (newest) point.
    /// No averaging or smoothing. Empty batches change nothing.
    pub fn apply(&mut self, batch: &[LocationUpdate]) {
        if let Some(update) = batch.last() {
            self.current = Some(update.coordinate());
        }
    }

    /// The last known coordinate, or `None` if no update has arrived
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.current
    }
}
