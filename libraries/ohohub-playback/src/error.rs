//! Error types for playback control

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The resource refused to start (e.g. blocked by an autoplay policy)
    #[error("Play request rejected: {0}")]
    PlayRejected(String),

    /// The resource could not register an event listener
    #[error("Listener registration failed: {0}")]
    ListenerRegistration(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
