//! Playback Events
//!
//! Event-based communication for UI synchronization. The controller queues
//! an event whenever transport, position or volume state changes; the page
//! drains them with `PlaybackController::drain_events`.

use crate::types::TransportState;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Transport state changed
    StateChanged {
        /// The new transport state
        state: TransportState,
    },

    /// Position update from the resource
    PositionUpdate {
        /// Current position in seconds
        current_time: f64,
        /// Total length in seconds
        duration: f64,
    },

    /// Duration became known
    DurationChanged {
        /// Total length in seconds
        duration: f64,
    },

    /// Volume or mute changed
    VolumeChanged {
        /// New volume level (0-100)
        level: u8,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// Resource reached the end naturally
    Ended,
}
