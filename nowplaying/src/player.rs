use crate::bridge::{ElementConfig, MediaBridge, MediaElement, MediaEventSender};
use crate::config::PlayerConfig;
use crate::deeplink::{DeepLinkResolver, DeepLinkTime, Navigation};
use crate::error::CommandResult;
use crate::model::{AudioSource, MediaEvent, PlaybackState, TransportCommand};
use crate::state::PlaybackStore;
use crate::transport::Transport;

/// The synchronization core of one player widget
///
/// Owns the bridge, the deep-link resolver and the transport, all writing to
/// a shared [`PlaybackStore`]. Every method runs to completion on the
/// caller's thread.
pub struct AudioPlayer {
    store: PlaybackStore,
    bridge: MediaBridge,
    resolver: DeepLinkResolver,
    transport: Transport,
    source: Option<AudioSource>,
    config: PlayerConfig,
}

impl AudioPlayer {
    /// Create a player with its own store
    pub fn new(config: PlayerConfig) -> Self {
        Self::with_store(PlaybackStore::new(), config)
    }

    /// Create a player writing to an existing store
    pub fn with_store(store: PlaybackStore, config: PlayerConfig) -> Self {
        Self {
            bridge: MediaBridge::new(store.clone(), &config),
            transport: Transport::new(config.clone()),
            resolver: DeepLinkResolver::new(),
            source: None,
            store,
            config,
        }
    }

    pub fn store(&self) -> &PlaybackStore {
        &self.store
    }

    pub fn state(&self) -> PlaybackState {
        self.store.snapshot()
    }

    pub fn source(&self) -> Option<&AudioSource> {
        self.source.as_ref()
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Sender for the media element's events
    pub fn event_sender(&self) -> MediaEventSender {
        self.bridge.sender()
    }

    /// Show `source` for a navigation, seeking to its deep-link time if it has one
    ///
    /// The source is loaded first so the seek applies to it. A navigation
    /// within the already loaded source keeps playback going.
    pub fn navigate(&mut self, source: AudioSource, navigation: &Navigation) -> Option<DeepLinkTime> {
        let current_url = self.store.with_state(|state| state.source_url.clone());
        if current_url != source.url {
            self.store.load_source(&source, self.config.autoplay);
        }
        self.source = Some(source);

        let time = self.resolver.resolve(navigation)?;
        log::info!("Deep link to {} ({}s)", time, time.as_secs());
        self.store.seek(time.as_secs_f64());
        Some(time)
    }

    /// Apply one media element event
    pub fn handle_event(&mut self, event: MediaEvent) {
        self.bridge.handle_event(event);
    }

    /// Apply every event the element has queued
    pub fn pump_events(&mut self) -> usize {
        self.bridge.pump()
    }

    pub fn dispatch(&self, command: TransportCommand) -> CommandResult {
        self.transport.execute(&self.store, self.source.as_ref(), command)
    }

    /// Element configuration for this update cycle
    pub fn drive(&mut self) -> ElementConfig {
        self.bridge.drive()
    }

    /// Drive `element` for this update cycle
    pub fn sync(&mut self, element: &mut dyn MediaElement) {
        self.bridge.sync(element);
    }

    /// Share link for the current position
    pub fn share_fragment(&self) -> String {
        let seconds = self.store.with_state(|state| state.current_time.floor() as u64);
        DeepLinkTime::from_secs(seconds).to_fragment()
    }
}
