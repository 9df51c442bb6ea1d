/// Errors surfaced by the public player interface
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("Invalid navigation URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

pub type Result<T> = std::result::Result<T, PlayerError>;

/// Reasons a state write is rejected at the store boundary
///
/// These never leave the store: a rejected write is dropped and logged,
/// leaving the previous value in place.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StateError {
    #[error("playback rate must be a positive finite number, got {0}")]
    InvalidPlaybackRate(f64),

    #[error("playback position must be a non-negative finite number of seconds, got {0}")]
    InvalidTime(f64),

    #[error("duration must be a non-negative finite number of seconds, got {0}")]
    InvalidDuration(f64),
}

/// Errors that can occur while executing a transport command
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    /// The command needs a loaded source and none is loaded
    #[error("No audio source loaded")]
    NoSource,

    /// The requested chapter index does not exist in the current source
    #[error("Chapter {index} not found ({available} available)")]
    ChapterNotFound { index: usize, available: usize },
}

/// Result type for transport command execution
pub type CommandResult = std::result::Result<(), CommandError>;
