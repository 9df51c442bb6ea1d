use crate::model::{AudioSource, Field, PlaybackState, StateChange, StateUpdate, SubscriptionId};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

type Subscriber = Arc<dyn Fn(&StateChange) + Send + Sync>;

/// A one-shot seek recorded by the store for the media element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekRequest {
    pub target: f64,
    /// Position epoch the request was made in; unique per request
    pub generation: u64,
}

struct StoreInner {
    state: PlaybackState,
    seek: Option<SeekRequest>,
    epoch: u64,
}

/// Single source of truth for what is "now playing"
///
/// Clones share the same underlying state, so a store can be handed to any
/// number of readers. Every mutation goes through the methods below, which
/// validate the new values and notify subscribers once per mutation.
pub struct PlaybackStore {
    inner: Arc<RwLock<StoreInner>>,
    subscribers: Arc<RwLock<Vec<(SubscriptionId, Subscriber)>>>,
}

impl PlaybackStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                state: PlaybackState::new(),
                seek: None,
                epoch: 0,
            })),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> PlaybackState {
        self.read().state.clone()
    }

    /// Run `f` against the current state without cloning it
    pub fn with_state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&PlaybackState) -> T,
    {
        f(&self.read().state)
    }

    /// The most recent seek request, if one is outstanding for this source
    pub fn seek_request(&self) -> Option<SeekRequest> {
        self.read().seek
    }

    /// Counter bumped by every seek, reset and source load
    pub fn position_epoch(&self) -> u64 {
        self.read().epoch
    }

    /// Replace a single field. Invalid values are dropped.
    pub fn set_field(&self, update: StateUpdate) {
        self.set_fields([update]);
    }

    /// Replace several fields with a single notification
    ///
    /// Each update is validated on its own; invalid ones are dropped and the
    /// rest still apply. A `CurrentTime` write is a seek: it is recorded for
    /// the media element like [`PlaybackStore::seek`].
    pub fn set_fields<I>(&self, updates: I)
    where
        I: IntoIterator<Item = StateUpdate>,
    {
        let change = {
            let mut inner = self.write();
            let mut fields = Vec::new();
            for update in updates {
                if let Err(err) = update.validate() {
                    log::debug!("Dropping write to {:?}: {}", update.field(), err);
                    continue;
                }
                if let StateUpdate::CurrentTime(time) = update {
                    Self::record_seek(&mut inner, time);
                }
                let field = update.field();
                if update.apply_to(&mut inner.state) && !fields.contains(&field) {
                    fields.push(field);
                }
            }
            Self::change(fields, &inner.state)
        };
        self.notify(change);
    }

    /// Store a position reported by the media element
    ///
    /// Unlike a `CurrentTime` write this is not a seek; the bridge has already
    /// filtered the report.
    pub(crate) fn report_position(&self, time: f64) {
        let update = StateUpdate::CurrentTime(time);
        if let Err(err) = update.validate() {
            log::debug!("Dropping position report: {}", err);
            return;
        }

        let change = {
            let mut inner = self.write();
            let fields = if update.apply_to(&mut inner.state) {
                vec![Field::CurrentTime]
            } else {
                Vec::new()
            };
            Self::change(fields, &inner.state)
        };
        self.notify(change);
    }

    /// Move the position to `time` and record it as a seek for the media element
    pub fn seek(&self, time: f64) {
        let update = StateUpdate::CurrentTime(time);
        if let Err(err) = update.validate() {
            log::debug!("Dropping seek: {}", err);
            return;
        }

        let change = {
            let mut inner = self.write();
            Self::record_seek(&mut inner, time);
            let fields = if update.apply_to(&mut inner.state) {
                vec![Field::CurrentTime]
            } else {
                Vec::new()
            };
            Self::change(fields, &inner.state)
        };
        self.notify(change);
    }

    /// Stop and rewind: `paused = true`, `current_time = 0`, `loading = false`
    ///
    /// Subscribers see the three writes as one change.
    pub fn reset(&self) {
        let change = {
            let mut inner = self.write();
            Self::record_seek(&mut inner, 0.0);
            let mut fields = Vec::new();
            for update in [
                StateUpdate::Paused(true),
                StateUpdate::CurrentTime(0.0),
                StateUpdate::Loading(false),
            ] {
                let field = update.field();
                if update.apply_to(&mut inner.state) {
                    fields.push(field);
                }
            }
            Self::change(fields, &inner.state)
        };
        self.notify(change);
    }

    /// Describe a newly loaded source
    ///
    /// Replaces the metadata and rewinds to the start. Any outstanding seek
    /// belonged to the previous source and is discarded.
    pub fn load_source(&self, source: &AudioSource, autoplay: bool) {
        log::info!("Loading source {} ({})", source.url, source.title);
        let change = {
            let mut inner = self.write();
            inner.epoch += 1;
            inner.seek = None;
            let mut fields = Vec::new();
            for update in [
                StateUpdate::Title(source.title.clone()),
                StateUpdate::Artist(source.artist.clone()),
                StateUpdate::Artwork(source.artwork.clone()),
                StateUpdate::SourceUrl(source.url.clone()),
                StateUpdate::CurrentTime(0.0),
                StateUpdate::Duration(None),
                StateUpdate::Loading(false),
                StateUpdate::Paused(!autoplay),
            ] {
                let field = update.field();
                if update.apply_to(&mut inner.state) {
                    fields.push(field);
                }
            }
            Self::change(fields, &inner.state)
        };
        self.notify(change);
    }

    /// Register a subscriber, called after every mutation in registration order
    pub fn subscribe<F>(&self, subscriber: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.write().unwrap_or_else(PoisonError::into_inner);
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn record_seek(inner: &mut StoreInner, target: f64) {
        inner.epoch += 1;
        inner.seek = Some(SeekRequest {
            target,
            generation: inner.epoch,
        });
    }

    fn change(fields: Vec<Field>, state: &PlaybackState) -> Option<StateChange> {
        if fields.is_empty() {
            return None;
        }
        Some(StateChange {
            fields,
            state: state.clone(),
        })
    }

    /// Deliver a change to every subscriber
    ///
    /// Runs with no lock held so subscribers may read or write the store.
    fn notify(&self, change: Option<StateChange>) {
        let Some(change) = change else {
            return;
        };

        let subscribers: Vec<Subscriber> = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, subscriber)| subscriber.clone())
            .collect();

        for (index, subscriber) in subscribers.iter().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                subscriber(&change);
            }));
            if result.is_err() {
                log::error!("Subscriber #{} panicked while handling {:?}", index + 1, change.fields);
            }
        }
    }
}

impl Default for PlaybackStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for PlaybackStore {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}
