//! Platform-agnostic audio resource trait
//!
//! Abstracts the element that actually plays audio (an HTML audio element in
//! a browser, a decoder-backed sink natively).

use crate::error::Result;
use std::cell::RefCell;
use std::rc::Rc;

/// Events a resource reports to its listeners
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResourceEvent {
    /// Playback position advanced
    TimeUpdate { current_time: f64 },

    /// Metadata (and so the duration) became available
    LoadedMetadata { duration: f64 },

    /// Playback reached the end of the media
    Ended,
}

impl ResourceEvent {
    /// Kind used to route the event to listeners
    pub fn kind(&self) -> EventKind {
        match self {
            ResourceEvent::TimeUpdate { .. } => EventKind::TimeUpdate,
            ResourceEvent::LoadedMetadata { .. } => EventKind::LoadedMetadata,
            ResourceEvent::Ended => EventKind::Ended,
        }
    }
}

/// Event kinds a listener can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    TimeUpdate,
    LoadedMetadata,
    Ended,
}

impl EventKind {
    /// Every kind the playback controller listens for
    pub const ALL: [EventKind; 3] = [
        EventKind::TimeUpdate,
        EventKind::LoadedMetadata,
        EventKind::Ended,
    ];
}

/// Handle returned when a listener is registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Callback invoked for each matching event
pub type Listener = Box<dyn FnMut(&ResourceEvent)>;

/// A resource shared between the page and the controller
pub type SharedResource = Rc<RefCell<dyn AudioResource>>;

/// One playable audio resource
///
/// All calls happen on the UI thread. Implementors deliver events by
/// invoking registered listeners; they must not hold a listener borrow
/// across calls back into the controller.
pub trait AudioResource {
    /// Request playback
    ///
    /// # Returns
    /// * `Ok(())` - Request accepted
    /// * `Err(PlayRejected)` - Refused (autoplay policy, no source, ...)
    fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping the position
    fn pause(&mut self);

    /// Current position in seconds
    fn current_time(&self) -> f64;

    /// Move the playback position (seconds)
    fn set_current_time(&mut self, seconds: f64);

    /// Media length in seconds; 0 or NaN before metadata loads
    fn duration(&self) -> f64;

    /// Output volume in `[0.0, 1.0]`
    fn volume(&self) -> f64;

    /// Set output volume in `[0.0, 1.0]`
    fn set_volume(&mut self, volume: f64);

    /// Register `listener` for events of `kind`
    fn add_listener(&mut self, kind: EventKind, listener: Listener) -> Result<ListenerId>;

    /// Unregister a listener; unknown ids are ignored
    fn remove_listener(&mut self, id: ListenerId);
}
