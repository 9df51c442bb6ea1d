/// Commands issued by the transport controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransportCommand {
    Play,
    Pause,
    TogglePlay,
    SeekForward,
    SeekBackward,
    Seek(f64),
    JumpToChapter(usize),
    SetSpeed(f64),
    CycleSpeed,
    Reset,
}

impl TransportCommand {
    /// Returns the human-readable name of this command
    pub fn name(&self) -> &'static str {
        match self {
            TransportCommand::Play => "Play",
            TransportCommand::Pause => "Pause",
            TransportCommand::TogglePlay => "Toggle play",
            TransportCommand::SeekForward => "Seek forward",
            TransportCommand::SeekBackward => "Seek backward",
            TransportCommand::Seek(_) => "Seek",
            TransportCommand::JumpToChapter(_) => "Jump to chapter",
            TransportCommand::SetSpeed(_) => "Set speed",
            TransportCommand::CycleSpeed => "Cycle speed",
            TransportCommand::Reset => "Reset",
        }
    }
}
