use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::app_state::AppState;
use super::layout::{BORDER_INACTIVE, TEXT_MUTED, TEXT_PRIMARY};
use super::method_tag;

/// Right-hand pane: what the active request is and where it lives.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.width < 4 || area.height < 2 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_INACTIVE))
        .title(" Request ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(request) = state.store.active_request() else {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "No request selected",
            Style::default().fg(TEXT_MUTED).add_modifier(Modifier::DIM),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(placeholder, inner);
        return;
    };

    let group = state
        .store
        .workspace
        .group_of(&request.id)
        .map(|g| g.name.as_str())
        .unwrap_or("(ungrouped)");

    let label = Style::default().fg(TEXT_MUTED);
    let value = Style::default().fg(TEXT_PRIMARY);
    let lines = vec![
        Line::from(vec![
            method_tag::span(request.method),
            Span::raw(" "),
            Span::styled(request.name.clone(), value.add_modifier(Modifier::BOLD)),
        ]),
        Line::default(),
        Line::from(vec![Span::styled("Group  ", label), Span::styled(group.to_string(), value)]),
        Line::from(vec![Span::styled("Id     ", label), Span::styled(request.id.clone(), value)]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
