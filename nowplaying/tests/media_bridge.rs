use nowplaying::{
    ElementConfig, MediaBridge, MediaElement, MediaEvent, PlayerConfig, PlaybackStore,
    StateUpdate,
};
use std::sync::{Arc, Mutex};

/// Helper function to create a bridge over a fresh store
fn create_test_bridge() -> MediaBridge {
    MediaBridge::new(PlaybackStore::new(), &PlayerConfig::minimal())
}

/// Helper function to record every value `current_time` takes
fn record_positions(store: &PlaybackStore) -> Arc<Mutex<Vec<f64>>> {
    let positions = Arc::new(Mutex::new(Vec::new()));
    let sink = positions.clone();
    store.subscribe(move |change| {
        if change.contains(nowplaying::Field::CurrentTime) {
            sink.lock().unwrap().push(change.state.current_time);
        }
    });
    positions
}

/// Media element double that keeps every configuration it was given
#[derive(Default)]
struct RecordingElement {
    applied: Vec<ElementConfig>,
}

impl MediaElement for RecordingElement {
    fn apply(&mut self, config: &ElementConfig) {
        self.applied.push(config.clone());
    }
}

#[test]
fn test_out_of_order_report_is_discarded() {
    let mut bridge = create_test_bridge();
    let positions = record_positions(bridge.store());

    for time in [10.0, 8.0, 12.0] {
        bridge.handle_event(MediaEvent::TimeUpdate { current_time: time });
    }

    assert_eq!(*positions.lock().unwrap(), vec![10.0, 12.0]);
}

#[test]
fn test_duplicate_report_updates_once() {
    let mut bridge = create_test_bridge();
    let updates = Arc::new(Mutex::new(0));
    let sink = updates.clone();
    bridge.store().subscribe(move |_| *sink.lock().unwrap() += 1);

    bridge.handle_event(MediaEvent::TimeUpdate { current_time: 4.0 });
    bridge.handle_event(MediaEvent::TimeUpdate { current_time: 4.0 });

    assert_eq!(*updates.lock().unwrap(), 1);
}

#[test]
fn test_waiting_then_playing_keeps_paused() {
    for paused in [true, false] {
        let mut bridge = create_test_bridge();
        bridge.store().set_field(StateUpdate::Paused(paused));

        bridge.handle_event(MediaEvent::Waiting);
        assert!(bridge.store().snapshot().loading);
        bridge.handle_event(MediaEvent::Playing);

        let state = bridge.store().snapshot();
        assert!(!state.loading);
        assert_eq!(state.paused, paused);
    }
}

#[test]
fn test_loading_while_playing() {
    let mut bridge = create_test_bridge();
    bridge.handle_event(MediaEvent::Play);
    bridge.handle_event(MediaEvent::Waiting);

    let state = bridge.store().snapshot();
    assert!(!state.paused);
    assert!(state.loading);
}

#[test]
fn test_load_error_recovers_to_paused() {
    let mut bridge = create_test_bridge();
    bridge.handle_event(MediaEvent::Play);
    bridge.handle_event(MediaEvent::TimeUpdate { current_time: 18.0 });
    bridge.handle_event(MediaEvent::Waiting);
    bridge.handle_event(MediaEvent::Error {
        message: "MEDIA_ERR_NETWORK".to_string(),
    });

    let state = bridge.store().snapshot();
    assert!(state.paused);
    assert!(!state.loading);
    assert_eq!(state.current_time, 18.0);

    // Nothing retries on its own
    let config = bridge.drive();
    assert!(config.paused);
}

#[test]
fn test_seek_then_late_report() {
    let mut bridge = create_test_bridge();
    let positions = record_positions(bridge.store());

    bridge.handle_event(MediaEvent::TimeUpdate { current_time: 200.0 });
    bridge.store().seek(20.0);
    bridge.handle_event(MediaEvent::TimeUpdate { current_time: 200.25 });
    bridge.handle_event(MediaEvent::TimeUpdate { current_time: 20.25 });

    assert_eq!(*positions.lock().unwrap(), vec![200.0, 20.0, 20.25]);
}

#[test]
fn test_current_time_write_is_a_seek() {
    let mut bridge = create_test_bridge();
    let mut element = RecordingElement::default();
    let positions = record_positions(bridge.store());

    bridge.handle_event(MediaEvent::TimeUpdate { current_time: 10.0 });
    bridge.store().set_field(StateUpdate::CurrentTime(100.0));
    bridge.sync(&mut element);
    bridge.handle_event(MediaEvent::TimeUpdate { current_time: 11.0 });

    assert_eq!(element.applied.last().unwrap().seek_to, Some(100.0));
    assert_eq!(*positions.lock().unwrap(), vec![10.0, 100.0]);
    assert_eq!(bridge.store().snapshot().current_time, 100.0);
}

#[test]
fn test_element_is_not_seeked_twice_to_same_target() {
    let mut bridge = create_test_bridge();
    let mut element = RecordingElement::default();

    bridge.store().seek(45.0);
    bridge.sync(&mut element);
    bridge.sync(&mut element);
    bridge.store().seek(45.0);
    bridge.sync(&mut element);

    let seeks: Vec<Option<f64>> = element.applied.iter().map(|c| c.seek_to).collect();
    assert_eq!(seeks, vec![Some(45.0), None, None]);

    // Once the position has moved, the same target is a real seek again
    bridge.handle_event(MediaEvent::TimeUpdate { current_time: 45.2 });
    bridge.store().seek(45.0);
    bridge.sync(&mut element);
    assert_eq!(element.applied.last().unwrap().seek_to, Some(45.0));
}

#[test]
fn test_position_reports_never_become_seeks() {
    let mut bridge = create_test_bridge();
    let mut element = RecordingElement::default();

    for time in [1.0, 2.0, 3.0] {
        bridge.handle_event(MediaEvent::TimeUpdate { current_time: time });
        bridge.sync(&mut element);
    }

    assert!(element.applied.iter().all(|config| config.seek_to.is_none()));
}

#[test]
fn test_events_from_queue_apply_in_order() {
    let mut bridge = create_test_bridge();
    let sender = bridge.sender();

    sender.send(MediaEvent::Play);
    sender.send(MediaEvent::Waiting);
    sender.send(MediaEvent::Playing);
    sender.send(MediaEvent::Pause);

    assert_eq!(bridge.pump(), 4);
    let state = bridge.store().snapshot();
    assert!(state.paused);
    assert!(!state.loading);
}
