use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Color,
};

use crate::state::app_state::{ActivePopup, AppState};
use super::{confirm_delete, detail, naming_popup, sidebar, status_bar};

// TokyoNight palette
pub const ACCENT_BLUE: Color = Color::Rgb(122, 162, 247);   // #7aa2f7
pub const BORDER_INACTIVE: Color = Color::Rgb(65, 72, 104); // #414868
pub const BG: Color = Color::Rgb(26, 27, 38);               // #1a1b26
pub const SURFACE: Color = Color::Rgb(41, 45, 62);
pub const TEXT_MUTED: Color = Color::Rgb(86, 95, 137);
pub const TEXT_PRIMARY: Color = Color::Rgb(192, 202, 245);
pub const STATUS_ERR: Color = Color::Rgb(247, 118, 142);

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Split off status bar at bottom
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let horiz = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(state.sidebar_width), Constraint::Min(0)])
        .split(vertical[0]);

    sidebar::render(frame, horiz[0], state);
    detail::render(frame, horiz[1], state);
    status_bar::render(frame, vertical[1], state);

    // Overlay popups — rendered last so they appear on top
    match &state.active_popup {
        ActivePopup::None => {}
        ActivePopup::RenameGroup => naming_popup::render(frame, area, state),
        ActivePopup::ConfirmDelete => confirm_delete::render(frame, area, state),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::config::Config;
    use crate::state::request::{HttpMethod, Request};
    use crate::state::workspace::Workspace;
    use crate::store::WorkspaceStore;

    #[test]
    fn test_full_layout_renders_without_panicking_on_tiny_terminal() {
        let ws = Workspace {
            name: "w".into(),
            requests: vec![Request::with_id("r", HttpMethod::Get, "Ping")],
            request_groups: vec![],
        };
        let state = AppState::new(WorkspaceStore::new(ws), &Config::default());
        for (w, h) in [(1, 1), (10, 3), (80, 24)] {
            let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
            terminal.draw(|frame| render(frame, &state)).unwrap();
        }
    }
}
