//! UI rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::cli::{Display, IDLE_HINT};
use crate::engine::Clock;
use crate::types::Phase;

use super::app::App;

const FONT_COLOR: Color = Color::Rgb(235, 219, 178);

/// Background for each phase.
pub fn background(phase: Phase) -> Color {
    match phase {
        Phase::Idle => Color::Rgb(29, 32, 33),
        Phase::Work => Color::Rgb(204, 36, 29),
        Phase::ShortBreak => Color::Rgb(152, 151, 26),
        Phase::LongBreak => Color::Rgb(69, 133, 136),
    }
}

/// Main draw function
pub fn draw<C: Clock>(f: &mut Frame, app: &App<C>) {
    let state = app.state();
    let base = Style::default().fg(FONT_COLOR).bg(background(state.phase));

    f.render_widget(Block::default().style(base), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Corner clock
            Constraint::Fill(1),
            Constraint::Length(1), // Headline
            Constraint::Length(1), // Phase or hint
            Constraint::Length(1), // Interval markers
            Constraint::Fill(1),
        ])
        .split(f.area());

    if state.phase.is_active() {
        draw_corner_clock(f, &Display::format_clock(&state.clock), chunks[0], base);
    }

    let headline = Paragraph::new(Display::headline(state))
        .style(base.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(headline, chunks[2]);

    let caption = match state.phase {
        Phase::Idle => IDLE_HINT,
        phase => Display::phase_label(phase),
    };
    f.render_widget(
        Paragraph::new(caption).style(base).alignment(Alignment::Center),
        chunks[3],
    );

    let markers = Display::interval_markers(
        state.completed_work_intervals,
        app.intervals_before_long_break(),
    );
    f.render_widget(
        Paragraph::new(markers).style(base).alignment(Alignment::Center),
        chunks[4],
    );
}

fn draw_corner_clock(f: &mut Frame, clock: &str, area: Rect, style: Style) {
    let line = Line::from(vec![Span::raw(" "), Span::raw(clock.to_string())]);
    f.render_widget(Paragraph::new(line).style(style), area);
}
