//! Platform sensor plumbing
//!
//! The operating system owns motion detection and geolocation; this crate
//! only defines the channels those events arrive on. [`sensor_channels`]
//! pairs the event-loop ends with cloneable senders that a platform backend
//! (or the development driver in `main`) can feed from any thread.

use calloop::channel::{channel, Channel, Sender};

use crate::location::LocationUpdate;

/// A shake-began motion event. Intensity and duration are not reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShakeEvent;

/// Sender halves handed to the platform backend
#[derive(Clone)]
pub struct SensorSenders {
    /// Feed with location update batches
    pub locations: Sender<Vec<LocationUpdate>>,
    /// Feed with shake gestures
    pub shakes: Sender<ShakeEvent>,
}

/// Receiving halves, inserted into the main event loop as sources
pub struct SensorChannels {
    /// Location update batches
    pub locations: Channel<Vec<LocationUpdate>>,
    /// Shake gestures
    pub shakes: Channel<ShakeEvent>,
}

/// Create the sensor channel pair
pub fn sensor_channels() -> (SensorSenders, SensorChannels) {
    let (location_sender, location_channel) = channel();
    let (shake_sender, shake_channel) = channel();

    (
        SensorSenders {
            locations: location_sender,
            shakes: shake_sender,
        },
        SensorChannels {
            locations: location_channel,
            shakes: shake_channel,
        },
    )
}
