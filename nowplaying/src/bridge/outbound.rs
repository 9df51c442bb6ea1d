use crate::state::SeekRequest;

/// Configuration applied to the media element on every update cycle
#[derive(Debug, Clone, PartialEq)]
pub struct ElementConfig {
    pub src: String,
    pub paused: bool,
    pub playback_rate: f64,
    /// One-shot seek target; `None` leaves the element's position alone
    pub seek_to: Option<f64>,
}

/// The audio engine driven by the bridge
///
/// Implementations load `src` when it changes before honouring `seek_to`,
/// and report their lifecycle through a `MediaEventSender`.
pub trait MediaElement {
    fn apply(&mut self, config: &ElementConfig);
}

/// Decides when a recorded seek request is forwarded to the element
#[derive(Debug, Default)]
pub(crate) struct SeekGate {
    last_generation: u64,
    last_issued: Option<f64>,
    src: String,
}

impl SeekGate {
    /// The seek to issue this cycle, if any
    ///
    /// Each request is forwarded at most once, and not at all when it targets
    /// the position the element was last sent to with nothing in between.
    pub(crate) fn next_seek(&mut self, src: &str, request: Option<SeekRequest>) -> Option<f64> {
        if self.src != src {
            self.src = src.to_string();
            self.last_issued = None;
        }

        let request = request?;
        if request.generation == self.last_generation {
            return None;
        }
        self.last_generation = request.generation;

        if self.last_issued == Some(request.target) {
            log::debug!("Skipping redundant seek to {:.2}s", request.target);
            return None;
        }
        self.last_issued = Some(request.target);
        Some(request.target)
    }

    /// The element's position changed since the last seek
    pub(crate) fn position_moved(&mut self) {
        self.last_issued = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SRC: &str = "https://example.com/episode.mp3";

    fn request(target: f64, generation: u64) -> Option<SeekRequest> {
        Some(SeekRequest { target, generation })
    }

    #[test]
    fn test_request_is_forwarded_once() {
        let mut gate = SeekGate::default();
        assert_eq!(gate.next_seek(SRC, request(60.0, 1)), Some(60.0));
        assert_eq!(gate.next_seek(SRC, request(60.0, 1)), None);
        assert_eq!(gate.next_seek(SRC, None), None);
    }

    #[test]
    fn test_repeated_target_is_suppressed() {
        let mut gate = SeekGate::default();
        assert_eq!(gate.next_seek(SRC, request(60.0, 1)), Some(60.0));
        assert_eq!(gate.next_seek(SRC, request(60.0, 2)), None);
        assert_eq!(gate.next_seek(SRC, request(70.0, 3)), Some(70.0));
    }

    #[test]
    fn test_repeated_target_after_movement_is_forwarded() {
        let mut gate = SeekGate::default();
        assert_eq!(gate.next_seek(SRC, request(60.0, 1)), Some(60.0));
        gate.position_moved();
        assert_eq!(gate.next_seek(SRC, request(60.0, 2)), Some(60.0));
    }

    #[test]
    fn test_source_change_clears_last_target() {
        let mut gate = SeekGate::default();
        assert_eq!(gate.next_seek(SRC, request(60.0, 1)), Some(60.0));
        assert_eq!(
            gate.next_seek("https://example.com/other.mp3", request(60.0, 3)),
            Some(60.0)
        );
    }
}
