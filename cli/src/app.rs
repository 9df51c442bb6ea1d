use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use nowplaying::{
    AudioPlayer, AudioSource, Chapter, Navigation, PlayerConfig, TransportCommand,
    VisibilityAction, VisibilityState,
};
use ratatui::{DefaultTerminal, Frame};

use crate::element::SimulatedElement;
use crate::view::{self, WidgetProps};

const TICK: Duration = Duration::from_millis(250);
const DEMO_DURATION: f64 = 1860.0;

fn demo_source() -> AudioSource {
    AudioSource::new("https://example.com/audio/why-rust.mp3")
        .with_title("Why Rust, Read Aloud")
        .with_artist("The Reading Room")
        .with_artwork("https://example.com/audio/why-rust.jpg")
        .with_chapters(vec![
            Chapter::new("Opening", 0.0),
            Chapter::new("Ownership", 240.0),
            Chapter::new("Fearless concurrency", 780.0),
            Chapter::new("Closing thoughts", 1620.0),
        ])
}

pub struct App {
    player: AudioPlayer,
    element: SimulatedElement,
    visibility: VisibilityState,
    navigation: Navigation,
    status: Option<String>,
    exit: bool,
}

impl App {
    pub fn new(navigation: Navigation) -> Self {
        let player = AudioPlayer::new(PlayerConfig::default());
        let element = SimulatedElement::new(player.event_sender(), DEMO_DURATION);
        Self {
            player,
            element,
            visibility: VisibilityState::new(),
            navigation,
            status: None,
            exit: false,
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        if let Some(time) = self.player.navigate(demo_source(), &self.navigation) {
            self.status = Some(format!("Resuming at {}", time));
        }

        let mut last_tick = Instant::now();
        while !self.exit {
            self.player.pump_events();
            self.player.sync(&mut self.element);
            terminal.draw(|frame| self.draw(frame))?;

            let timeout = TICK.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                self.handle_events()?;
            }

            let elapsed = last_tick.elapsed();
            if elapsed >= TICK {
                self.element.tick(elapsed);
                log::trace!("Element clock at {:.2}s", self.element.position());
                last_tick = Instant::now();
            }
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let state = self.player.state();
        view::draw(
            frame,
            &WidgetProps {
                state: &state,
                source: self.player.source(),
                visibility: self.visibility,
                status: self.status.as_deref(),
            },
        );
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if let Event::Key(key_event) = event::read()? {
            if key_event.kind == KeyEventKind::Press {
                self.handle_key(key_event);
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') => self.exit = true,
            KeyCode::Char('m') => self.visibility.apply(VisibilityAction::ToggleHidden),
            KeyCode::Char('e') => self.visibility.apply(VisibilityAction::ToggleExpanded),
            KeyCode::Char('l') => {
                self.status = Some(format!("Share link: {}", self.player.share_fragment()));
            }
            // Controls are unreachable while the widget is minimized
            _ if self.visibility.is_hidden() => {}
            KeyCode::Char(' ') => self.dispatch(TransportCommand::TogglePlay),
            KeyCode::Right => self.dispatch(TransportCommand::SeekForward),
            KeyCode::Left => self.dispatch(TransportCommand::SeekBackward),
            KeyCode::Char('s') => self.dispatch(TransportCommand::CycleSpeed),
            KeyCode::Char('c') => self.next_chapter(),
            KeyCode::Char('x') if self.player.state().paused => {
                self.dispatch(TransportCommand::Reset)
            }
            _ => {}
        }
    }

    fn next_chapter(&mut self) {
        let current_time = self.player.state().current_time;
        let next = self
            .player
            .source()
            .and_then(|source| source.chapter_at(current_time))
            .map_or(0, |index| index + 1);
        self.dispatch(TransportCommand::JumpToChapter(next));
    }

    fn dispatch(&mut self, command: TransportCommand) {
        match self.player.dispatch(command) {
            Ok(()) => self.status = None,
            Err(err) => {
                log::info!("{} failed: {}", command.name(), err);
                self.status = Some(err.to_string());
            }
        }
    }
}
