use nowplaying::{AudioSource, DeepLinkTime, PlaybackState, VisibilityState};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph},
    Frame,
};

const WIDGET_WIDTH: u16 = 46;
const COLLAPSED_HEIGHT: u16 = 4;
const EXPANDED_HEIGHT: u16 = 8;
const RESTORE_BUTTON: &str = " ⤢ show player (m) ";

/// Everything the widget needs for one frame
pub struct WidgetProps<'a> {
    pub state: &'a PlaybackState,
    pub source: Option<&'a AudioSource>,
    pub visibility: VisibilityState,
    pub status: Option<&'a str>,
}

/// `m:ss` or `h:mm:ss`
pub fn format_clock(seconds: f64) -> String {
    let whole = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    DeepLinkTime::from_secs(whole).to_string()
}

/// Where the floating widget sits: the bottom-right corner of `area`
pub fn widget_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width + 1).min(area.width - width),
        y: area.y + area.height.saturating_sub(height + 1).min(area.height - height),
        width,
        height,
    }
}

pub fn draw(frame: &mut Frame, props: &WidgetProps) {
    draw_background(frame, props.status);

    if props.visibility.is_hidden() {
        draw_restore_button(frame);
        return;
    }

    let height = if props.visibility.is_expanded() {
        EXPANDED_HEIGHT
    } else {
        COLLAPSED_HEIGHT
    };
    let area = widget_area(frame.area(), WIDGET_WIDTH, height);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" now playing ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if props.visibility.is_expanded() {
        let [header, gauge, details, controls] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);
        draw_header(frame, header, props.state);
        draw_gauge(frame, gauge, props.state);
        draw_details(frame, details, props);
        frame.render_widget(
            Paragraph::new("←/→ seek  s speed  c chapter  space play").dim(),
            controls,
        );
    } else {
        draw_header(frame, inner, props.state);
    }
}

fn draw_background(frame: &mut Frame, status: Option<&str>) {
    let mut lines = vec![
        Line::from("Article reader".bold()),
        Line::from(""),
        Line::from("q quit   e expand   m minimize   x stop (paused)   l share link"),
    ];
    if let Some(status) = status {
        lines.push(Line::from(""));
        lines.push(Line::from(status.to_string()).fg(Color::Cyan));
    }
    frame.render_widget(Paragraph::new(lines), frame.area());
}

fn draw_restore_button(frame: &mut Frame) {
    let width = RESTORE_BUTTON.chars().count() as u16 + 2;
    let area = widget_area(frame.area(), width, 3);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(RESTORE_BUTTON).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        ),
        area,
    );
}

fn draw_header(frame: &mut Frame, area: Rect, state: &PlaybackState) {
    let icon = if state.loading {
        "⧗"
    } else if state.paused {
        "▶"
    } else {
        "⏸"
    };
    // The stop button replaces seek-forward while paused
    let trailing = if state.paused { "✕" } else { "»" };
    let title = if state.title.is_empty() {
        "Nothing playing"
    } else {
        state.title.as_str()
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("[♪] "),
            Span::styled(title.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("  {} {}", icon, trailing)),
        ]),
        Line::from(format!("    {}", state.artist)).dim(),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_gauge(frame: &mut Frame, area: Rect, state: &PlaybackState) {
    let total = state
        .duration
        .map(format_clock)
        .unwrap_or_else(|| "--:--".to_string());
    let label = format!("{} / {}", format_clock(state.current_time), total);
    frame.render_widget(
        Gauge::default()
            .ratio(state.progress().unwrap_or(0.0))
            .label(label)
            .gauge_style(Style::default().fg(Color::Green)),
        area,
    );
}

fn draw_details(frame: &mut Frame, area: Rect, props: &WidgetProps) {
    let chapter = props
        .source
        .and_then(|source| {
            source
                .chapter_at(props.state.current_time)
                .and_then(|index| source.chapters.get(index))
        })
        .map(|chapter| chapter.title.as_str())
        .unwrap_or("-");
    frame.render_widget(
        Paragraph::new(format!("{}x   {}", props.state.playback_rate, chapter)),
        area,
    );
}
