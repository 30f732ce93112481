use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::state::app_state::AppState;
use crate::ui::layout::{BG, STATUS_ERR, TEXT_MUTED, TEXT_PRIMARY};
use crate::ui::popup::centered_rect;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(50, 6, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(STATUS_ERR))
        .title(" Delete Group ")
        .style(Style::default().bg(BG));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 2 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            state.confirm_delete.message.as_str(),
            Style::default().fg(TEXT_PRIMARY),
        )))
        .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let hint = Line::from(vec![
        Span::styled("y/Enter", Style::default().fg(STATUS_ERR)),
        Span::styled(" delete  ", Style::default().fg(TEXT_MUTED)),
        Span::styled("n/Esc", Style::default().fg(TEXT_PRIMARY)),
        Span::styled(" cancel", Style::default().fg(TEXT_MUTED)),
    ]);
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().add_modifier(Modifier::DIM)),
        chunks[1],
    );
}
