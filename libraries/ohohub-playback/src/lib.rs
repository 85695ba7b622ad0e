//! Ohohub - Playback Control
//!
//! Platform-agnostic transport control for a single audio resource.
//!
//! This crate provides:
//! - Play/pause toggling with optimistic state
//! - Stop (pause and rewind)
//! - Percentage seeking once the duration is known
//! - Volume control (linear, 0-100%, mute/unmute)
//! - Position, duration and end-of-media tracking from resource events
//! - Scoped listener registration released on rebind, unbind and drop
//!
//! # Architecture
//!
//! `ohohub-playback` does not know what actually produces sound. The page
//! wraps its audio element in an [`AudioResource`] and hands it to a
//! [`PlaybackController`], which registers listeners on it and drives it.
//! Everything runs on one thread; shared handles are `Rc<RefCell<_>>`.
//!
//! # Example
//!
//! ```rust
//! use ohohub_playback::{
//!     AudioResource, EventKind, Listener, ListenerId, PlaybackConfig, PlaybackController,
//!     Result,
//! };
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! // Implement AudioResource for your platform
//! #[derive(Default)]
//! struct SilentElement {
//!     time: f64,
//!     volume: f64,
//!     next_id: u64,
//! }
//!
//! impl AudioResource for SilentElement {
//!     fn play(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) {}
//!     fn current_time(&self) -> f64 { self.time }
//!     fn set_current_time(&mut self, seconds: f64) { self.time = seconds; }
//!     fn duration(&self) -> f64 { 120.0 }
//!     fn volume(&self) -> f64 { self.volume }
//!     fn set_volume(&mut self, volume: f64) { self.volume = volume; }
//!     fn add_listener(&mut self, _kind: EventKind, _listener: Listener) -> Result<ListenerId> {
//!         self.next_id += 1;
//!         Ok(ListenerId(self.next_id))
//!     }
//!     fn remove_listener(&mut self, _id: ListenerId) {}
//! }
//!
//! let element = Rc::new(RefCell::new(SilentElement::default()));
//! let mut player = PlaybackController::new(PlaybackConfig::default());
//! player.bind(element.clone()).unwrap();
//!
//! player.toggle_play_pause();
//! player.seek(50.0);
//! assert_eq!(player.current_time(), 60.0);
//!
//! player.change_volume(80);
//! assert!((element.borrow().volume() - 0.8).abs() < 1e-9);
//! ```

mod controller;
mod error;
pub mod events;
mod format;
mod resource;
pub mod types;
mod volume;

// Public exports
pub use controller::PlaybackController;
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use format::{format_time, progress_percentage};
pub use resource::{
    AudioResource, EventKind, Listener, ListenerId, ResourceEvent, SharedResource,
};
pub use types::{PlaybackConfig, PlaybackState, ToggleOutcome, TransportState};
pub use volume::Volume;
