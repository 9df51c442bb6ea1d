mod audio_source;
mod field;
mod media_event;
mod navigation_id;
mod playback_state;
mod state_change;
mod subscription_id;
mod transport_command;

pub use audio_source::{AudioSource, Chapter};
pub use field::{Field, StateUpdate};
pub use media_event::MediaEvent;
pub use navigation_id::NavigationId;
pub use playback_state::PlaybackState;
pub use state_change::StateChange;
pub use subscription_id::SubscriptionId;
pub use transport_command::TransportCommand;
