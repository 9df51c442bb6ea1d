use serde::{Deserialize, Serialize};

/// The "now playing" record shared by every consumer of a store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    pub title: String,
    pub artist: String,
    pub artwork: Option<String>,
    pub playback_rate: f64,
    pub paused: bool,
    /// True while the media element is buffering. Independent of `paused`.
    pub loading: bool,
    /// Last known position in seconds
    pub current_time: f64,
    /// Length of the source in seconds, once the element has reported it
    pub duration: Option<f64>,
    pub source_url: String,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            artwork: None,
            playback_rate: 1.0,
            paused: true,
            loading: false,
            current_time: 0.0,
            duration: None,
            source_url: String::new(),
        }
    }

    /// True when a source is loaded
    pub fn has_source(&self) -> bool {
        !self.source_url.is_empty()
    }

    /// Playing and not stalled on buffering
    pub fn is_audible(&self) -> bool {
        !self.paused && !self.loading
    }

    /// Fraction of the source already played, if the duration is known
    pub fn progress(&self) -> Option<f64> {
        match self.duration {
            Some(duration) if duration > 0.0 => Some((self.current_time / duration).clamp(0.0, 1.0)),
            _ => None,
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}
