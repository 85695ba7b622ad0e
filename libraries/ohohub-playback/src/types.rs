//! Core types for playback control

use serde::{Deserialize, Serialize};

/// Snapshot of the transport as shown by the player UI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    pub is_playing: bool,
    pub is_muted: bool,

    /// Position in seconds
    pub current_time: f64,

    /// Length in seconds, 0 until metadata has loaded
    pub duration: f64,

    /// Volume level (0-100), kept while muted
    pub volume: u8,
}

/// Coarse transport state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportState {
    /// No resource bound, or the bound resource has no data yet
    Idle,

    /// Loaded but not playing
    Paused,

    /// Play requested
    Playing,
}

/// Configuration for a playback controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial volume (0-100, default: 50)
    pub volume: u8,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { volume: 50 }
    }
}

/// Result of a play/pause toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Nothing bound; nothing happened
    Unbound,

    /// Pause was requested
    Paused,

    /// Play was requested and accepted by the resource
    PlayRequested,

    /// Play was requested but refused; the state still reads as playing
    PlayRejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlaybackConfig::default();
        assert_eq!(config.volume, 50);
    }

    #[test]
    fn state_serializes_camel_case() {
        let state = PlaybackState {
            is_playing: true,
            is_muted: false,
            current_time: 1.5,
            duration: 10.0,
            volume: 50,
        };
        let json = serde_json::to_value(state).unwrap();
        assert_eq!(json["isPlaying"], true);
        assert_eq!(json["currentTime"], 1.5);
    }
}
