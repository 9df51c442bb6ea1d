//! Two-way translation between the store and the media element.
//!
//! Inbound, element events become store writes ([`translate`] and
//! [`PositionFilter`]). Outbound, [`MediaBridge::drive`] turns the store into
//! the [`ElementConfig`] the element is driven with.

mod inbound;
mod outbound;
mod queue;

pub use inbound::{translate, PositionFilter, ReportVerdict};
pub use outbound::{ElementConfig, MediaElement};
pub use queue::{MediaEventQueue, MediaEventSender};

use crate::config::PlayerConfig;
use crate::model::{MediaEvent, StateUpdate};
use crate::state::PlaybackStore;
use outbound::SeekGate;

pub struct MediaBridge {
    store: PlaybackStore,
    filter: PositionFilter,
    gate: SeekGate,
    queue: MediaEventQueue,
}

impl MediaBridge {
    pub fn new(store: PlaybackStore, config: &PlayerConfig) -> Self {
        Self {
            store,
            filter: PositionFilter::new(config.seek_tolerance, config.max_stale_reports),
            gate: SeekGate::default(),
            queue: MediaEventQueue::new(),
        }
    }

    pub fn store(&self) -> &PlaybackStore {
        &self.store
    }

    /// Sender for the media element to post its events to
    pub fn sender(&self) -> MediaEventSender {
        self.queue.sender()
    }

    /// Apply one media element event to the store
    pub fn handle_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::TimeUpdate { current_time } => self.handle_position(current_time),
            MediaEvent::Error { ref message } => {
                log::warn!("Media element failed: {}", message);
                self.store.set_fields(translate(&event));
            }
            other => self.store.set_fields(translate(&other)),
        }
    }

    /// Handle every queued element event. Returns the number handled.
    pub fn pump(&mut self) -> usize {
        let events = self.queue.drain();
        let count = events.len();
        for event in events {
            self.handle_event(event);
        }
        count
    }

    /// Element configuration for this update cycle
    pub fn drive(&mut self) -> ElementConfig {
        let state = self.store.snapshot();
        let seek_to = self.gate.next_seek(&state.source_url, self.store.seek_request());
        if let Some(target) = seek_to {
            log::debug!("Seeking element to {:.2}s", target);
        }

        ElementConfig {
            src: state.source_url,
            paused: state.paused,
            playback_rate: state.playback_rate,
            seek_to,
        }
    }

    /// Drive `element` with the configuration for this cycle
    pub fn sync(&mut self, element: &mut dyn MediaElement) {
        let config = self.drive();
        element.apply(&config);
    }

    fn handle_position(&mut self, reported: f64) {
        let epoch = self.store.position_epoch();
        let seek = self.store.seek_request();

        match self.filter.check(reported, epoch, seek) {
            ReportVerdict::Accept => {
                self.gate.position_moved();
                self.store.report_position(reported);
            }
            ReportVerdict::Duplicate => {}
            ReportVerdict::Stale => {
                log::debug!("Discarding stale position report {:.2}s", reported);
            }
        }
    }
}
