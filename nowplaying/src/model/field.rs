use crate::error::StateError;
use crate::model::PlaybackState;

/// Names of the individual fields of a [`PlaybackState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Artist,
    Artwork,
    PlaybackRate,
    Paused,
    Loading,
    CurrentTime,
    Duration,
    SourceUrl,
}

/// A single-field write carrying its new value
#[derive(Debug, Clone, PartialEq)]
pub enum StateUpdate {
    Title(String),
    Artist(String),
    Artwork(Option<String>),
    PlaybackRate(f64),
    Paused(bool),
    Loading(bool),
    CurrentTime(f64),
    Duration(Option<f64>),
    SourceUrl(String),
}

impl StateUpdate {
    pub fn field(&self) -> Field {
        match self {
            StateUpdate::Title(_) => Field::Title,
            StateUpdate::Artist(_) => Field::Artist,
            StateUpdate::Artwork(_) => Field::Artwork,
            StateUpdate::PlaybackRate(_) => Field::PlaybackRate,
            StateUpdate::Paused(_) => Field::Paused,
            StateUpdate::Loading(_) => Field::Loading,
            StateUpdate::CurrentTime(_) => Field::CurrentTime,
            StateUpdate::Duration(_) => Field::Duration,
            StateUpdate::SourceUrl(_) => Field::SourceUrl,
        }
    }

    /// Check the value against the field's range
    pub fn validate(&self) -> Result<(), StateError> {
        match *self {
            StateUpdate::PlaybackRate(rate) if !(rate.is_finite() && rate > 0.0) => {
                Err(StateError::InvalidPlaybackRate(rate))
            }
            StateUpdate::CurrentTime(time) if !(time.is_finite() && time >= 0.0) => {
                Err(StateError::InvalidTime(time))
            }
            StateUpdate::Duration(Some(duration)) if !(duration.is_finite() && duration >= 0.0) => {
                Err(StateError::InvalidDuration(duration))
            }
            _ => Ok(()),
        }
    }

    /// Write the value into `state`. Returns false when the field already held it.
    pub(crate) fn apply_to(self, state: &mut PlaybackState) -> bool {
        fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
            if *slot == value {
                return false;
            }
            *slot = value;
            true
        }

        match self {
            StateUpdate::Title(value) => replace(&mut state.title, value),
            StateUpdate::Artist(value) => replace(&mut state.artist, value),
            StateUpdate::Artwork(value) => replace(&mut state.artwork, value),
            StateUpdate::PlaybackRate(value) => replace(&mut state.playback_rate, value),
            StateUpdate::Paused(value) => replace(&mut state.paused, value),
            StateUpdate::Loading(value) => replace(&mut state.loading, value),
            StateUpdate::CurrentTime(value) => replace(&mut state.current_time, value),
            StateUpdate::Duration(value) => replace(&mut state.duration, value),
            StateUpdate::SourceUrl(value) => replace(&mut state.source_url, value),
        }
    }
}
