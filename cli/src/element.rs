use std::time::Duration;

use nowplaying::{ElementConfig, MediaElement, MediaEvent, MediaEventSender};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chance per tick of a position report arriving late
const LATE_REPORT_CHANCE: f64 = 0.05;
/// Chance per tick of the stream stalling
const STALL_CHANCE: f64 = 0.02;

/// Stand-in for an audio engine: keeps a clock and reports like a real element would
pub struct SimulatedElement {
    events: MediaEventSender,
    src: String,
    paused: bool,
    rate: f64,
    position: f64,
    duration: f64,
    /// Ticks left before buffering finishes
    buffering: u32,
    rng: StdRng,
}

impl SimulatedElement {
    pub fn new(events: MediaEventSender, duration: f64) -> Self {
        Self::with_rng(events, duration, StdRng::from_entropy())
    }

    pub fn with_rng(events: MediaEventSender, duration: f64, rng: StdRng) -> Self {
        Self {
            events,
            src: String::new(),
            paused: true,
            rate: 1.0,
            position: 0.0,
            duration,
            buffering: 0,
            rng,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Advance the clock by `elapsed` wall time
    pub fn tick(&mut self, elapsed: Duration) {
        if self.src.is_empty() || self.paused {
            return;
        }

        if self.buffering > 0 {
            self.buffering -= 1;
            if self.buffering == 0 {
                self.send(MediaEvent::Playing);
            }
            return;
        }

        let previous = self.position;
        self.position = (self.position + elapsed.as_secs_f64() * self.rate).min(self.duration);
        self.send(MediaEvent::TimeUpdate {
            current_time: self.position,
        });

        if self.rng.gen_bool(LATE_REPORT_CHANCE) {
            log::trace!("Simulating late report {:.2}s", previous);
            self.send(MediaEvent::TimeUpdate {
                current_time: previous,
            });
        }

        if self.position >= self.duration {
            self.paused = true;
            self.send(MediaEvent::Ended);
        } else if self.rng.gen_bool(STALL_CHANCE) {
            self.buffering = self.rng.gen_range(2..6);
            self.send(MediaEvent::Waiting);
        }
    }

    fn send(&self, event: MediaEvent) {
        if !self.events.send(event) {
            log::warn!("Player is gone, dropping media event");
        }
    }
}

impl MediaElement for SimulatedElement {
    fn apply(&mut self, config: &ElementConfig) {
        if config.src != self.src {
            self.src = config.src.clone();
            self.position = 0.0;
            if !self.src.is_empty() {
                self.buffering = 2;
                self.send(MediaEvent::Waiting);
                self.send(MediaEvent::DurationChange {
                    duration: self.duration,
                });
            }
        }

        self.rate = config.playback_rate;

        if let Some(target) = config.seek_to {
            self.position = target.min(self.duration);
            self.buffering = 1;
            self.send(MediaEvent::Waiting);
        }

        if config.paused != self.paused {
            self.paused = config.paused;
            self.send(if self.paused {
                MediaEvent::Pause
            } else {
                MediaEvent::Play
            });
        }
    }
}
