use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::app_state::AppState;
use crate::state::mode::Mode;
use super::layout::BORDER_INACTIVE;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let (mode_label, mode_color) = match state.mode {
        Mode::Normal => ("NORMAL", Color::Rgb(122, 162, 247)),   // blue
        Mode::Insert => ("FILTER", Color::Rgb(158, 206, 106)),   // green
    };

    let mode_span = Span::styled(
        format!(" {} ", mode_label),
        Style::default()
            .fg(Color::Black)
            .bg(mode_color)
            .add_modifier(Modifier::BOLD),
    );

    let hints = match state.mode {
        Mode::Normal => "  · j/k:move · Enter:open · Space:fold · a:add · r:rename · d:delete · /:filter · q:quit",
        Mode::Insert => "  · Enter:apply · Esc:clear/leave",
    };
    let mut spans = vec![mode_span, Span::styled(hints, Style::default().fg(BORDER_INACTIVE))];

    if let Some(filter) = state.store.active_filter() {
        spans.push(Span::styled(
            format!("  filter: \"{filter}\""),
            Style::default().fg(Color::Rgb(224, 175, 104)),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
