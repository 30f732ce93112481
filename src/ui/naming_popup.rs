use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::state::app_state::AppState;
use crate::ui::layout::{ACCENT_BLUE, BG, TEXT_MUTED, TEXT_PRIMARY};
use crate::ui::popup::centered_rect;

/// Rename popup for the selected request group.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(50, 5, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT_BLUE))
        .title(" Rename Group ")
        .style(Style::default().bg(BG));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 3 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let input = &state.naming.input;
    let cursor = state.naming.cursor.min(input.len());

    // Block cursor over the char under it, or a trailing underscore at the end.
    let (before, under, after) = match input[cursor..].chars().next() {
        Some(ch) => (
            &input[..cursor],
            ch.to_string(),
            &input[cursor + ch.len_utf8()..],
        ),
        None => (input.as_str(), "_".to_string(), ""),
    };

    let input_line = Line::from(vec![
        Span::styled(before.to_string(), Style::default().fg(TEXT_PRIMARY)),
        Span::styled(under, Style::default().bg(Color::White).fg(Color::Black)),
        Span::styled(after.to_string(), Style::default().fg(TEXT_PRIMARY)),
    ]);
    frame.render_widget(Paragraph::new(input_line), chunks[0]);

    let col_offset = input[..cursor].chars().count() as u16;
    frame.set_cursor_position(Position {
        x: chunks[0].x + col_offset.min(chunks[0].width.saturating_sub(1)),
        y: chunks[0].y,
    });

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "─".repeat(inner.width as usize),
            Style::default().fg(TEXT_MUTED),
        ))),
        chunks[1],
    );

    let hint = Line::from(vec![
        Span::styled("Enter", Style::default().fg(TEXT_PRIMARY)),
        Span::styled(" rename  ", Style::default().fg(TEXT_MUTED)),
        Span::styled("Esc", Style::default().fg(TEXT_PRIMARY)),
        Span::styled(" cancel", Style::default().fg(TEXT_MUTED)),
    ]);
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().add_modifier(Modifier::DIM)),
        chunks[2],
    );
}
