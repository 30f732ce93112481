use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::sidebar::{GroupRow, RequestRow, SidebarRow};
use crate::state::app_state::AppState;
use crate::state::focus::Focus;
use crate::state::mode::Mode;
use super::layout::{ACCENT_BLUE, SURFACE, TEXT_MUTED, TEXT_PRIMARY};
use super::method_tag;

const FILTER_PLACEHOLDER: &str = "Filter Requests";
const INDENT: &str = "  ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::Sidebar;

    let title = format!(" {} ", state.store.workspace.name);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT_BLUE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width < 4 || inner.height < 2 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    render_tree(frame, chunks[0], state, focused);
    render_filter(frame, chunks[1], state);
}

fn render_tree(frame: &mut Frame, area: Rect, state: &AppState, focused: bool) {
    let props = state.store.props();
    let rows = props.render();

    if rows.is_empty() {
        let hint = if props.filter_active() {
            "No matching requests"
        } else {
            "Press a to add a request"
        };
        let placeholder = Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(TEXT_MUTED).add_modifier(Modifier::DIM),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = rows.iter().map(|row| ListItem::new(row_line(row))).collect();

    let highlight = if focused {
        Style::default().bg(SURFACE)
    } else {
        Style::default()
    };
    let list = List::new(items).highlight_style(highlight);
    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// One sidebar row as a styled line.
pub fn row_line(row: &SidebarRow<'_>) -> Line<'static> {
    let indent = Span::raw(INDENT.repeat(row.depth() as usize));
    match row {
        SidebarRow::Group(group) => group_line(group),
        SidebarRow::Request(request) => {
            let mut spans = vec![indent];
            spans.extend(request_spans(request));
            Line::from(spans)
        }
        SidebarRow::Empty { .. } => Line::from(vec![
            indent,
            Span::styled(
                "No Requests",
                Style::default().fg(TEXT_MUTED).add_modifier(Modifier::ITALIC),
            ),
        ]),
    }
}

fn group_line(row: &GroupRow<'_>) -> Line<'static> {
    let (icon_color, name_style) = if row.active {
        (ACCENT_BLUE, Style::default().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD))
    } else {
        (TEXT_MUTED, Style::default().fg(TEXT_PRIMARY))
    };
    Line::from(vec![
        Span::styled(row.icon().glyph(), Style::default().fg(icon_color)),
        Span::raw(" "),
        Span::styled(row.group.name.clone(), name_style),
        Span::styled(format!(" ({})", row.matching), Style::default().fg(TEXT_MUTED)),
    ])
}

fn request_spans(row: &RequestRow<'_>) -> Vec<Span<'static>> {
    let name_style = if row.active {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_PRIMARY)
    };
    let marker = if row.active { "●" } else { " " };
    vec![
        Span::styled(marker, Style::default().fg(ACCENT_BLUE)),
        method_tag::span(row.request.method),
        Span::raw(" "),
        Span::styled(row.request.name.clone(), name_style),
    ]
}

fn render_filter(frame: &mut Frame, area: Rect, state: &AppState) {
    let input = &state.filter_input;
    let editing = state.focus == Focus::Filter && state.mode == Mode::Insert;
    let prefix_color = if editing { ACCENT_BLUE } else { TEXT_MUTED };

    let mut spans = vec![Span::styled("/ ", Style::default().fg(prefix_color))];
    if input.value.is_empty() && !editing {
        spans.push(Span::styled(
            FILTER_PLACEHOLDER,
            Style::default().fg(TEXT_MUTED).add_modifier(Modifier::DIM),
        ));
    } else {
        spans.push(Span::styled(input.value.clone(), Style::default().fg(TEXT_PRIMARY)));
    }
    if input.is_pending() {
        spans.push(Span::styled(" …", Style::default().fg(TEXT_MUTED)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    if editing {
        let col_offset = input.value[..input.cursor.min(input.value.len())].chars().count() as u16;
        frame.set_cursor_position(Position {
            x: (area.x + 2 + col_offset).min(area.x + area.width.saturating_sub(1)),
            y: area.y,
        });
    }
}
