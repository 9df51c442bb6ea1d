use crate::error::{PlayerError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for a player instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Seconds skipped by `SeekForward`
    pub seek_forward_step: f64,
    /// Seconds skipped by `SeekBackward`
    pub seek_backward_step: f64,
    /// Window in seconds around a seek target in which position reports are trusted
    pub seek_tolerance: f64,
    /// Consecutive out-of-window reports after a seek before the element's position is adopted
    pub max_stale_reports: u32,
    /// Speeds offered by the speed menu, ascending
    pub speed_options: Vec<f64>,
    /// Start playing as soon as a source is loaded
    pub autoplay: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            seek_forward_step: 10.0,
            seek_backward_step: 10.0,
            seek_tolerance: 2.0,
            max_stale_reports: 4,
            speed_options: vec![0.5, 0.75, 1.0, 1.25, 1.5, 2.0],
            autoplay: true,
        }
    }
}

impl PlayerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for tests: no autoplay and a tight seek window
    pub fn minimal() -> Self {
        Self {
            seek_tolerance: 0.5,
            max_stale_reports: 2,
            autoplay: false,
            ..Self::default()
        }
    }

    /// Set the forward and backward seek distances with validation
    pub fn with_seek_steps(mut self, forward: f64, backward: f64) -> Result<Self> {
        for step in [forward, backward] {
            if !(step.is_finite() && step > 0.0) {
                return Err(PlayerError::ConfigurationError(format!(
                    "Seek step must be a positive number of seconds, got {}",
                    step
                )));
            }
        }
        self.seek_forward_step = forward;
        self.seek_backward_step = backward;
        Ok(self)
    }

    /// Set the seek settle window with validation
    pub fn with_seek_tolerance(mut self, tolerance: f64) -> Result<Self> {
        if !(tolerance.is_finite() && tolerance >= 0.0) {
            return Err(PlayerError::ConfigurationError(format!(
                "Seek tolerance must be a non-negative number of seconds, got {}",
                tolerance
            )));
        }
        if tolerance > 60.0 {
            return Err(PlayerError::ConfigurationError(
                "Seek tolerance too large (max 60 seconds)".to_string(),
            ));
        }
        self.seek_tolerance = tolerance;
        Ok(self)
    }

    /// Set the stale report limit with validation
    pub fn with_max_stale_reports(mut self, limit: u32) -> Result<Self> {
        if limit == 0 {
            return Err(PlayerError::ConfigurationError(
                "Stale report limit must be greater than 0".to_string(),
            ));
        }
        self.max_stale_reports = limit;
        Ok(self)
    }

    /// Set the speed menu with validation; the list is sorted and deduplicated
    pub fn with_speed_options(mut self, mut speeds: Vec<f64>) -> Result<Self> {
        if speeds.is_empty() {
            return Err(PlayerError::ConfigurationError(
                "At least one speed option is required".to_string(),
            ));
        }
        if let Some(bad) = speeds.iter().find(|s| !(s.is_finite() && **s > 0.0)) {
            return Err(PlayerError::ConfigurationError(format!(
                "Speed options must be positive, got {}",
                bad
            )));
        }
        speeds.sort_by(f64::total_cmp);
        speeds.dedup();
        self.speed_options = speeds;
        Ok(self)
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// The speed after `current` in the menu, wrapping to the slowest
    pub fn next_speed(&self, current: f64) -> f64 {
        self.speed_options
            .iter()
            .copied()
            .find(|speed| *speed > current)
            .or_else(|| self.speed_options.first().copied())
            .unwrap_or(1.0)
    }
}
