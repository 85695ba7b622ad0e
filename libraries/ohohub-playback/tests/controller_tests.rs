//! Integration tests for the playback controller
//!
//! Drives the controller against a scripted resource that records every
//! command and lets the test fire resource events.

use ohohub_playback::{
    AudioResource, EventKind, Listener, ListenerId, PlaybackConfig, PlaybackController,
    PlaybackError, PlaybackEvent, ResourceEvent, ToggleOutcome, TransportState,
};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

// ===== Test Helpers =====

/// Scripted stand-in for an audio element
#[derive(Default)]
struct MockResource {
    playing: bool,
    time: f64,
    duration: f64,
    volume: f64,
    reject_play: bool,
    fail_listener_at: Option<usize>,
    listeners: Vec<(ListenerId, EventKind, Listener)>,
    next_id: u64,
    registrations: usize,
}

impl MockResource {
    fn with_duration(duration: f64) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            duration,
            volume: 1.0,
            ..Self::default()
        }))
    }

    fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl AudioResource for MockResource {
    fn play(&mut self) -> ohohub_playback::Result<()> {
        if self.reject_play {
            return Err(PlaybackError::PlayRejected("autoplay blocked".into()));
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn current_time(&self) -> f64 {
        self.time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.time = seconds;
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }

    fn add_listener(
        &mut self,
        kind: EventKind,
        listener: Listener,
    ) -> ohohub_playback::Result<ListenerId> {
        if self.fail_listener_at == Some(self.registrations) {
            return Err(PlaybackError::ListenerRegistration("out of slots".into()));
        }
        self.registrations += 1;
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.push((id, kind, listener));
        Ok(id)
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|(existing, _, _)| *existing != id);
    }
}

/// Deliver `event` to every matching listener on `resource`
fn emit(resource: &Rc<RefCell<MockResource>>, event: ResourceEvent) {
    let mut resource = resource.borrow_mut();
    for (_, kind, listener) in &mut resource.listeners {
        if *kind == event.kind() {
            listener(&event);
        }
    }
}

fn bound_controller(duration: f64) -> (PlaybackController, Rc<RefCell<MockResource>>) {
    let resource = MockResource::with_duration(duration);
    let mut controller = PlaybackController::new(PlaybackConfig::default());
    controller.bind(resource.clone()).unwrap();
    (controller, resource)
}

// ===== Binding =====

#[test]
fn bind_registers_one_listener_per_event_kind() {
    let (controller, resource) = bound_controller(0.0);

    assert!(controller.is_bound());
    assert_eq!(resource.borrow().listener_count(), 3);
    // Initial volume applied to the element
    assert!((resource.borrow().volume - 0.5).abs() < 1e-9);
}

#[test]
fn rebinding_same_resource_is_idempotent() {
    let (mut controller, resource) = bound_controller(0.0);
    emit(&resource, ResourceEvent::TimeUpdate { current_time: 4.0 });

    controller.bind(resource.clone()).unwrap();

    assert_eq!(resource.borrow().listener_count(), 3);
    assert_eq!(controller.current_time(), 4.0);
}

#[test]
fn rebinding_new_resource_releases_the_old_one() {
    let (mut controller, first) = bound_controller(100.0);
    controller.toggle_play_pause();
    controller.change_volume(70);

    let second = MockResource::with_duration(0.0);
    controller.bind(second.clone()).unwrap();

    assert_eq!(first.borrow().listener_count(), 0);
    assert_eq!(second.borrow().listener_count(), 3);

    // Old resource's events no longer reach the controller
    emit(&first, ResourceEvent::TimeUpdate { current_time: 99.0 });
    assert_eq!(controller.current_time(), 0.0);

    // Transport resets, volume carries over
    let state = controller.state();
    assert!(!state.is_playing);
    assert_eq!(state.duration, 0.0);
    assert_eq!(state.volume, 70);
    assert!((second.borrow().volume - 0.7).abs() < 1e-9);
}

#[test]
fn unbind_and_drop_remove_listeners() {
    let (mut controller, resource) = bound_controller(10.0);
    controller.unbind();
    assert_eq!(resource.borrow().listener_count(), 0);
    assert_eq!(controller.transport_state(), TransportState::Idle);

    controller.bind(resource.clone()).unwrap();
    assert_eq!(resource.borrow().listener_count(), 3);

    drop(controller);
    assert_eq!(resource.borrow().listener_count(), 0);
}

#[test]
fn failed_registration_releases_partial_binding() {
    let resource = MockResource::with_duration(10.0);
    resource.borrow_mut().fail_listener_at = Some(2);

    let mut controller = PlaybackController::default();
    let result = controller.bind(resource.clone());

    assert!(matches!(result, Err(PlaybackError::ListenerRegistration(_))));
    assert!(!controller.is_bound());
    assert_eq!(resource.borrow().listener_count(), 0);
}

#[test]
fn metadata_loaded_before_bind_is_picked_up() {
    let (controller, _resource) = bound_controller(42.0);
    assert_eq!(controller.duration(), 42.0);
    assert_eq!(controller.transport_state(), TransportState::Paused);
}

// ===== Transport =====

#[test]
fn toggle_flips_between_playing_and_paused() {
    let (mut controller, resource) = bound_controller(30.0);

    assert_eq!(controller.toggle_play_pause(), ToggleOutcome::PlayRequested);
    assert!(controller.is_playing());
    assert!(resource.borrow().playing);
    assert_eq!(controller.transport_state(), TransportState::Playing);

    assert_eq!(controller.toggle_play_pause(), ToggleOutcome::Paused);
    assert!(!controller.is_playing());
    assert!(!resource.borrow().playing);
    assert_eq!(controller.transport_state(), TransportState::Paused);
}

#[test]
fn rejected_play_stays_optimistic_until_rolled_back() {
    let (mut controller, resource) = bound_controller(30.0);
    resource.borrow_mut().reject_play = true;

    let outcome = controller.toggle_play_pause();
    assert!(matches!(outcome, ToggleOutcome::PlayRejected(ref msg) if msg.contains("autoplay")));
    assert!(controller.is_playing());
    assert!(!resource.borrow().playing);

    controller.mark_paused();
    assert!(!controller.is_playing());
}

#[test]
fn stop_pauses_and_rewinds() {
    let (mut controller, resource) = bound_controller(60.0);
    controller.toggle_play_pause();
    emit(&resource, ResourceEvent::TimeUpdate { current_time: 25.0 });

    controller.stop();

    assert!(!controller.is_playing());
    assert_eq!(controller.current_time(), 0.0);
    assert_eq!(resource.borrow().time, 0.0);
    assert!(!resource.borrow().playing);
}

#[test]
fn ended_clears_playing_but_keeps_position() {
    let (mut controller, resource) = bound_controller(12.0);
    controller.toggle_play_pause();
    emit(&resource, ResourceEvent::TimeUpdate { current_time: 12.0 });
    emit(&resource, ResourceEvent::Ended);

    assert!(!controller.is_playing());
    assert_eq!(controller.current_time(), 12.0);
    assert_eq!(controller.transport_state(), TransportState::Paused);
}

#[test]
fn resource_events_update_time_and_duration() {
    let (controller, resource) = bound_controller(0.0);
    assert_eq!(controller.transport_state(), TransportState::Idle);

    emit(&resource, ResourceEvent::LoadedMetadata { duration: 200.0 });
    emit(&resource, ResourceEvent::TimeUpdate { current_time: 3.5 });

    assert_eq!(controller.duration(), 200.0);
    assert_eq!(controller.current_time(), 3.5);
}

// ===== Seeking =====

#[test]
fn seek_half_of_two_hundred_is_one_hundred() {
    let (mut controller, resource) = bound_controller(200.0);
    controller.seek(50.0);

    assert_eq!(controller.current_time(), 100.0);
    assert_eq!(resource.borrow().time, 100.0);
}

#[test]
fn seek_without_duration_is_noop() {
    let (mut controller, resource) = bound_controller(0.0);
    emit(&resource, ResourceEvent::TimeUpdate { current_time: 7.0 });

    controller.seek(80.0);

    assert_eq!(controller.current_time(), 7.0);
    assert_eq!(resource.borrow().time, 0.0);
}

// ===== Volume =====

#[test]
fn zero_volume_mutes_and_raising_unmutes() {
    let (mut controller, resource) = bound_controller(10.0);

    controller.change_volume(0);
    assert!(controller.is_muted());
    assert_eq!(resource.borrow().volume, 0.0);

    controller.change_volume(35);
    assert!(!controller.is_muted());
    assert_eq!(controller.volume(), 35);
    assert!((resource.borrow().volume - 0.35).abs() < 1e-9);
}

#[test]
fn double_toggle_mute_restores_level() {
    let (mut controller, resource) = bound_controller(10.0);
    controller.change_volume(64);

    controller.toggle_mute();
    assert!(controller.is_muted());
    assert_eq!(resource.borrow().volume, 0.0);
    assert_eq!(controller.volume(), 64);

    controller.toggle_mute();
    assert!(!controller.is_muted());
    assert!((resource.borrow().volume - 0.64).abs() < 1e-9);
}

// ===== Events =====

#[test]
fn events_mirror_state_changes() {
    let (mut controller, resource) = bound_controller(10.0);
    controller.drain_events();

    controller.toggle_play_pause();
    emit(&resource, ResourceEvent::TimeUpdate { current_time: 1.0 });
    controller.change_volume(20);
    emit(&resource, ResourceEvent::Ended);

    let events = controller.drain_events();
    assert_eq!(
        events,
        vec![
            PlaybackEvent::StateChanged {
                state: TransportState::Playing
            },
            PlaybackEvent::PositionUpdate {
                current_time: 1.0,
                duration: 10.0
            },
            PlaybackEvent::VolumeChanged {
                level: 20,
                is_muted: false
            },
            PlaybackEvent::Ended,
            PlaybackEvent::StateChanged {
                state: TransportState::Paused
            },
        ]
    );
    assert!(!controller.has_pending_events());
}

// ===== Properties =====

proptest! {
    /// Property: any volume change followed by two mute toggles restores it
    #[test]
    fn mute_round_trip_restores_volume(level in 1u8..=100) {
        let (mut controller, resource) = bound_controller(10.0);
        controller.change_volume(level);
        controller.toggle_mute();
        controller.toggle_mute();

        prop_assert!(!controller.is_muted());
        prop_assert_eq!(controller.volume(), level);
        prop_assert!((resource.borrow().volume - f64::from(level) / 100.0).abs() < 1e-9);
    }

    /// Property: seeking lands on percentage * duration
    #[test]
    fn seek_is_proportional(duration in 0.1f64..10_000.0, percentage in 0.0f64..=100.0) {
        let (mut controller, _resource) = bound_controller(duration);
        controller.seek(percentage);

        let expected = percentage / 100.0 * duration;
        prop_assert!((controller.current_time() - expected).abs() < 1e-6);
    }
}
