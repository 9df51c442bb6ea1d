use crate::model::MediaEvent;
use std::sync::mpsc;

/// Sending half handed to the media element
#[derive(Debug, Clone)]
pub struct MediaEventSender(mpsc::Sender<MediaEvent>);

impl MediaEventSender {
    /// Post an event. Returns false if the queue no longer exists.
    pub fn send(&self, event: MediaEvent) -> bool {
        self.0.send(event).is_ok()
    }
}

/// Buffer between the media element and the bridge
///
/// Events are posted from element callbacks and drained on the thread that
/// owns the bridge, one at a time and in arrival order.
#[derive(Debug)]
pub struct MediaEventQueue {
    sender: mpsc::Sender<MediaEvent>,
    receiver: mpsc::Receiver<MediaEvent>,
}

impl MediaEventQueue {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    pub fn sender(&self) -> MediaEventSender {
        MediaEventSender(self.sender.clone())
    }

    /// Take every event queued so far without blocking
    pub fn drain(&self) -> Vec<MediaEvent> {
        self.receiver.try_iter().collect()
    }
}

impl Default for MediaEventQueue {
    fn default() -> Self {
        Self::new()
    }
}
