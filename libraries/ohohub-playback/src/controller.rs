//! Playback controller - transport orchestration
//!
//! Mediates every interaction with one bound audio resource and keeps the
//! transport state in step with the events the resource reports.

use crate::{
    error::Result,
    events::PlaybackEvent,
    resource::{EventKind, Listener, ListenerId, ResourceEvent, SharedResource},
    types::{PlaybackConfig, PlaybackState, ToggleOutcome, TransportState},
    volume::Volume,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, warn};

/// State written by resource listeners
#[derive(Debug, Default)]
struct Transport {
    is_playing: bool,
    current_time: f64,
    duration: f64,
    bound: bool,
    events: Vec<PlaybackEvent>,
}

impl Transport {
    fn state(&self) -> TransportState {
        if !self.bound {
            TransportState::Idle
        } else if self.is_playing {
            TransportState::Playing
        } else if self.duration == 0.0 && self.current_time == 0.0 {
            TransportState::Idle
        } else {
            TransportState::Paused
        }
    }

    fn set_playing(&mut self, playing: bool) {
        self.is_playing = playing;
        let state = self.state();
        self.events.push(PlaybackEvent::StateChanged { state });
    }

    fn handle(&mut self, event: &ResourceEvent) {
        match *event {
            ResourceEvent::TimeUpdate { current_time } => {
                self.current_time = current_time;
                self.events.push(PlaybackEvent::PositionUpdate {
                    current_time,
                    duration: self.duration,
                });
            }
            ResourceEvent::LoadedMetadata { duration } => {
                self.duration = sanitize_duration(duration);
                self.events.push(PlaybackEvent::DurationChanged {
                    duration: self.duration,
                });
            }
            ResourceEvent::Ended => {
                // Position stays where the resource stopped
                self.events.push(PlaybackEvent::Ended);
                self.set_playing(false);
            }
        }
    }
}

fn sanitize_duration(duration: f64) -> f64 {
    if duration.is_finite() && duration > 0.0 {
        duration
    } else {
        0.0
    }
}

/// Listener registrations on one resource
///
/// Dropping the binding removes every listener it registered, including a
/// partially completed registration.
struct Binding {
    resource: SharedResource,
    listeners: Vec<ListenerId>,
}

impl Drop for Binding {
    fn drop(&mut self) {
        match self.resource.try_borrow_mut() {
            Ok(mut resource) => {
                for id in self.listeners.drain(..) {
                    resource.remove_listener(id);
                }
            }
            Err(_) => warn!(
                listeners = self.listeners.len(),
                "Resource busy during unbind, listeners not removed"
            ),
        }
    }
}

/// Transport control over a single audio resource
///
/// Every command is a no-op while no resource is bound. Dropping the
/// controller releases the current binding.
///
/// # Example
///
/// ```rust,ignore
/// let mut player = PlaybackController::new(PlaybackConfig::default());
/// player.bind(resource)?;
/// player.toggle_play_pause();
/// player.seek(50.0);
/// player.change_volume(80);
/// ```
pub struct PlaybackController {
    transport: Rc<RefCell<Transport>>,
    volume: Volume,
    binding: Option<Binding>,
}

impl PlaybackController {
    /// Create an unbound controller
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            transport: Rc::new(RefCell::new(Transport::default())),
            volume: Volume::new(config.volume),
            binding: None,
        }
    }

    // ===== Binding =====

    /// Attach to `resource`, releasing any previous resource first
    ///
    /// Binding the resource that is already bound does nothing. A new
    /// resource starts from a fresh transport (stopped, position 0) and
    /// receives the current volume and mute setting.
    pub fn bind(&mut self, resource: SharedResource) -> Result<()> {
        if let Some(binding) = &self.binding {
            if Rc::ptr_eq(&binding.resource, &resource) {
                return Ok(());
            }
        }

        self.unbind();

        let mut binding = Binding {
            resource: Rc::clone(&resource),
            listeners: Vec::with_capacity(EventKind::ALL.len()),
        };

        for kind in EventKind::ALL {
            let listener = Self::listener(Rc::downgrade(&self.transport));
            let registered = resource.borrow_mut().add_listener(kind, listener);
            // On error the partial binding is dropped and cleans up
            binding.listeners.push(registered?);
        }

        let duration = sanitize_duration(resource.borrow().duration());
        resource.borrow_mut().set_volume(self.volume.gain());

        {
            let mut transport = self.transport.borrow_mut();
            let events = std::mem::take(&mut transport.events);
            *transport = Transport {
                duration,
                bound: true,
                events,
                ..Transport::default()
            };
            let state = transport.state();
            transport.events.push(PlaybackEvent::StateChanged { state });
        }

        debug!(duration, "Bound audio resource");
        self.binding = Some(binding);
        Ok(())
    }

    /// Detach from the current resource, removing all listeners
    pub fn unbind(&mut self) {
        if self.binding.take().is_some() {
            let mut transport = self.transport.borrow_mut();
            transport.bound = false;
            transport.is_playing = false;
            debug!("Unbound audio resource");
        }
    }

    /// Check if a resource is bound
    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    fn listener(transport: Weak<RefCell<Transport>>) -> Listener {
        Box::new(move |event| {
            if let Some(transport) = transport.upgrade() {
                transport.borrow_mut().handle(event);
            }
        })
    }

    fn resource(&self) -> Option<SharedResource> {
        self.binding.as_ref().map(|b| Rc::clone(&b.resource))
    }

    // ===== Transport Control =====

    /// Pause if playing, otherwise request play
    ///
    /// The playing flag flips immediately without waiting for the resource.
    /// A refused play request is reported in the outcome but the state is
    /// left reading "playing"; call [`mark_paused`](Self::mark_paused) to
    /// roll it back.
    pub fn toggle_play_pause(&mut self) -> ToggleOutcome {
        let Some(resource) = self.resource() else {
            return ToggleOutcome::Unbound;
        };

        let playing = self.transport.borrow().is_playing;

        if playing {
            resource.borrow_mut().pause();
            self.transport.borrow_mut().set_playing(false);
            ToggleOutcome::Paused
        } else {
            let result = resource.borrow_mut().play();
            self.transport.borrow_mut().set_playing(true);

            match result {
                Ok(()) => ToggleOutcome::PlayRequested,
                Err(e) => {
                    warn!(error = %e, "Play request rejected");
                    ToggleOutcome::PlayRejected(e.to_string())
                }
            }
        }
    }

    /// Force the playing flag off without touching the resource
    pub fn mark_paused(&mut self) {
        if self.is_bound() && self.transport.borrow().is_playing {
            self.transport.borrow_mut().set_playing(false);
        }
    }

    /// Pause and rewind to the start
    pub fn stop(&mut self) {
        let Some(resource) = self.resource() else {
            return;
        };

        {
            let mut resource = resource.borrow_mut();
            resource.pause();
            resource.set_current_time(0.0);
        }

        let mut transport = self.transport.borrow_mut();
        transport.current_time = 0.0;
        transport.set_playing(false);
    }

    /// Jump to `percentage` (0-100) of the duration
    ///
    /// Does nothing until the duration is known.
    pub fn seek(&mut self, percentage: f64) {
        let Some(resource) = self.resource() else {
            return;
        };

        let duration = self.transport.borrow().duration;
        if duration == 0.0 || !percentage.is_finite() {
            return;
        }

        let time = percentage.clamp(0.0, 100.0) / 100.0 * duration;
        resource.borrow_mut().set_current_time(time);

        let mut transport = self.transport.borrow_mut();
        transport.current_time = time;
        transport.events.push(PlaybackEvent::PositionUpdate {
            current_time: time,
            duration,
        });
    }

    // ===== Volume Control =====

    /// Set volume (0-100); 0 mutes, anything else unmutes
    pub fn change_volume(&mut self, level: u8) {
        let Some(resource) = self.resource() else {
            return;
        };

        self.volume.set_level(level);
        resource.borrow_mut().set_volume(self.volume.unmuted_gain());
        self.emit_volume_changed();
    }

    /// Toggle mute, restoring the previous level on unmute
    pub fn toggle_mute(&mut self) {
        let Some(resource) = self.resource() else {
            return;
        };

        self.volume.toggle_mute();
        resource.borrow_mut().set_volume(self.volume.gain());
        self.emit_volume_changed();
    }

    // ===== State Queries =====

    /// Snapshot of the transport
    pub fn state(&self) -> PlaybackState {
        let transport = self.transport.borrow();
        PlaybackState {
            is_playing: transport.is_playing,
            is_muted: self.volume.is_muted(),
            current_time: transport.current_time,
            duration: transport.duration,
            volume: self.volume.level(),
        }
    }

    /// Coarse transport state
    pub fn transport_state(&self) -> TransportState {
        self.transport.borrow().state()
    }

    pub fn is_playing(&self) -> bool {
        self.transport.borrow().is_playing
    }

    pub fn current_time(&self) -> f64 {
        self.transport.borrow().current_time
    }

    pub fn duration(&self) -> f64 {
        self.transport.borrow().duration
    }

    pub fn volume(&self) -> u8 {
        self.volume.level()
    }

    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    // ===== Events =====

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.transport.borrow_mut().events)
    }

    /// Check if there are queued events
    pub fn has_pending_events(&self) -> bool {
        !self.transport.borrow().events.is_empty()
    }

    fn emit_volume_changed(&mut self) {
        self.transport
            .borrow_mut()
            .events
            .push(PlaybackEvent::VolumeChanged {
                level: self.volume.level(),
                is_muted: self.volume.is_muted(),
            });
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}
