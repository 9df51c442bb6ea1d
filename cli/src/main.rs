mod app;
mod element;
mod view;

use std::env;
use std::fs::File;
use std::io;

use nowplaying::Navigation;
use simplelog::{Config, LevelFilter, WriteLogger};

use app::App;

const DEMO_URL: &str = "https://example.com/articles/why-rust#t=0:45";
const LOG_FILE: &str = "nowplaying.log";

fn main() -> io::Result<()> {
    init_logging()?;

    let page = env::args().nth(1).unwrap_or_else(|| DEMO_URL.to_string());
    let navigation = Navigation::from_url(&page).map_err(io::Error::other)?;
    log::info!("Opening {}", page);

    let mut terminal = ratatui::init();
    let app_result = App::new(navigation).run(&mut terminal);
    ratatui::restore();
    app_result
}

/// The terminal belongs to the UI, so logs go to a file
fn init_logging() -> io::Result<()> {
    let level = env::var("NOWPLAYING_LOG")
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);

    WriteLogger::init(level, Config::default(), File::create(LOG_FILE)?)
        .map_err(io::Error::other)
}
