use crate::config::PlayerConfig;
use crate::error::{CommandError, CommandResult};
use crate::model::{AudioSource, StateUpdate, TransportCommand};
use crate::state::PlaybackStore;

/// Executes transport commands against a store
///
/// Commands are translated into store writes only; the media element learns
/// about them on the next bridge update cycle.
#[derive(Debug, Clone)]
pub struct Transport {
    config: PlayerConfig,
}

impl Transport {
    pub fn new(config: PlayerConfig) -> Self {
        Self { config }
    }

    /// Execute `command`. `source` is the currently loaded source, if any.
    pub fn execute(
        &self,
        store: &PlaybackStore,
        source: Option<&AudioSource>,
        command: TransportCommand,
    ) -> CommandResult {
        log::debug!("{} command received", command.name());

        match command {
            TransportCommand::Play => store.set_field(StateUpdate::Paused(false)),
            TransportCommand::Pause => store.set_field(StateUpdate::Paused(true)),
            TransportCommand::TogglePlay => {
                let paused = store.with_state(|state| state.paused);
                store.set_field(StateUpdate::Paused(!paused));
            }
            TransportCommand::SeekForward => {
                let (current, duration) = store.with_state(|s| (s.current_time, s.duration));
                let mut target = current + self.config.seek_forward_step;
                if let Some(duration) = duration {
                    target = target.min(duration);
                }
                store.seek(target);
            }
            TransportCommand::SeekBackward => {
                let current = store.with_state(|state| state.current_time);
                store.seek((current - self.config.seek_backward_step).max(0.0));
            }
            TransportCommand::Seek(time) => store.seek(time),
            TransportCommand::JumpToChapter(index) => {
                let source = source.ok_or(CommandError::NoSource)?;
                let chapter = source.chapters.get(index).ok_or(CommandError::ChapterNotFound {
                    index,
                    available: source.chapters.len(),
                })?;
                log::debug!("Jumping to chapter '{}' at {:.2}s", chapter.title, chapter.start);
                store.seek(chapter.start);
            }
            TransportCommand::SetSpeed(rate) => store.set_field(StateUpdate::PlaybackRate(rate)),
            TransportCommand::CycleSpeed => {
                let current = store.with_state(|state| state.playback_rate);
                store.set_field(StateUpdate::PlaybackRate(self.config.next_speed(current)));
            }
            TransportCommand::Reset => store.reset(),
        }

        Ok(())
    }
}
