/// Lifecycle events emitted by the media element
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    Play,
    Pause,
    /// Buffering started
    Waiting,
    /// Buffering ended or playback resumed
    Playing,
    /// Periodic position report
    TimeUpdate { current_time: f64 },
    DurationChange { duration: f64 },
    Ended,
    /// The source failed to load or play
    Error { message: String },
}
