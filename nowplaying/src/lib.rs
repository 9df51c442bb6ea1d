pub mod bridge;
pub mod config;
pub mod deeplink;
pub mod error;
pub mod model;
pub mod player;
pub mod state;
pub mod transport;
pub mod visibility;

// Re-export key types for easier access
pub use bridge::{ElementConfig, MediaBridge, MediaElement, MediaEventQueue, MediaEventSender};
pub use config::PlayerConfig;
pub use deeplink::{parse_time_fragment, DeepLinkResolver, DeepLinkTime, Navigation};
pub use error::{CommandError, CommandResult, PlayerError, Result, StateError};
pub use model::{
    AudioSource, Chapter, Field, MediaEvent, NavigationId, PlaybackState, StateChange,
    StateUpdate, SubscriptionId, TransportCommand,
};
pub use player::AudioPlayer;
pub use state::PlaybackStore;
pub use transport::Transport;
pub use visibility::{VisibilityAction, VisibilityState};
