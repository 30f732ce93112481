use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use crate::config::Config;
use crate::event::Event;
use crate::sidebar::{self, RowKey, SidebarActions};
use crate::state::app_state::{ActivePopup, AppState};
use crate::state::focus::Focus;
use crate::state::mode::Mode;
use crate::state::request_group::RequestGroupPatch;
use crate::store::WorkspaceStore;

pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new(store: WorkspaceStore, config: &Config) -> Self {
        Self { state: AppState::new(store, config) }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                self.state.dirty = true;
                self.handle_key(key, Instant::now());
            }
            Event::Key(_) => {}
            // Tick: nothing to redo unless a debounced filter value lands.
            Event::Tick => {
                if !self.handle_tick(Instant::now()) {
                    return;
                }
            }
            Event::Mouse(mouse) => {
                self.state.dirty = true;
                self.handle_mouse(mouse);
            }
            // Terminal resize always requires a full redraw.
            Event::Resize(_, _) => self.state.dirty = true,
        }
        self.state.clamp_selection();
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.should_quit = true;
            return;
        }
        match self.state.active_popup {
            ActivePopup::RenameGroup => return self.handle_naming_key(key),
            ActivePopup::ConfirmDelete => return self.handle_confirm_delete_key(key),
            ActivePopup::None => {}
        }
        match self.state.mode {
            Mode::Normal => self.handle_normal_key(key),
            Mode::Insert => self.handle_filter_key(key, now),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.state.should_quit = true,
            KeyCode::Tab => self.state.focus = self.state.focus.next(),
            KeyCode::BackTab => self.state.focus = self.state.focus.prev(),
            KeyCode::Char('/') => {
                self.state.focus = Focus::Filter;
                self.state.mode = Mode::Insert;
            }
            KeyCode::Char('i') | KeyCode::Enter if self.state.focus == Focus::Filter => {
                self.state.mode = Mode::Insert;
            }
            KeyCode::Char('j') | KeyCode::Down => self.move_selection(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(-1),
            KeyCode::Char('g') | KeyCode::Home => self.state.selected = 0,
            KeyCode::Char('G') | KeyCode::End => {
                let len = self.state.rows().len();
                self.state.selected = len.saturating_sub(1);
            }
            KeyCode::Enter | KeyCode::Char('l') => {
                if let Some(row) = self.state.selected_key() {
                    sidebar::activate_row(&mut self.state.store, &row);
                }
            }
            KeyCode::Char(' ') | KeyCode::Char('h') => {
                if let Some(group_id) = self.selected_group_id() {
                    self.state.store.toggle_request_group(&group_id);
                    self.select_group_header(&group_id);
                }
            }
            KeyCode::Char('a') => {
                let row = self.state.selected_key();
                sidebar::add_request_at(&mut self.state.store, row.as_ref());
                self.state.select_active_request();
            }
            KeyCode::Char('r') => self.open_rename(),
            KeyCode::Char('d') => self.open_confirm_delete(),
            _ => {}
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent, now: Instant) {
        let input = &mut self.state.filter_input;
        match key.code {
            KeyCode::Esc => {
                if input.value.is_empty() {
                    self.state.mode = Mode::Normal;
                    self.state.focus = Focus::Sidebar;
                } else {
                    input.clear(now);
                    self.forward_filter();
                }
            }
            KeyCode::Enter => {
                self.forward_filter();
                self.state.mode = Mode::Normal;
                self.state.focus = Focus::Sidebar;
                self.state.selected = 0;
            }
            KeyCode::Char(c) => input.insert_char(c, now),
            KeyCode::Backspace => input.backspace(now),
            KeyCode::Delete => input.delete(now),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_home(),
            KeyCode::End => input.move_end(),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Up => self.move_selection(-1),
            _ => {}
        }
    }

    fn handle_naming_key(&mut self, key: KeyEvent) {
        let naming = &mut self.state.naming;
        match key.code {
            KeyCode::Esc => self.state.active_popup = ActivePopup::None,
            KeyCode::Enter => {
                let name = naming.input.trim().to_string();
                if !name.is_empty() {
                    let id = naming.group_id.clone();
                    self.state.store.update_request_group(&id, RequestGroupPatch::rename(name));
                }
                self.state.active_popup = ActivePopup::None;
            }
            KeyCode::Char(c) => {
                naming.input.insert(naming.cursor, c);
                naming.cursor += c.len_utf8();
            }
            KeyCode::Backspace => {
                if let Some((idx, _)) = naming.input[..naming.cursor].char_indices().next_back() {
                    naming.input.drain(idx..naming.cursor);
                    naming.cursor = idx;
                }
            }
            KeyCode::Left => {
                if let Some((idx, _)) = naming.input[..naming.cursor].char_indices().next_back() {
                    naming.cursor = idx;
                }
            }
            KeyCode::Right => {
                if let Some(c) = naming.input[naming.cursor..].chars().next() {
                    naming.cursor += c.len_utf8();
                }
            }
            _ => {}
        }
    }

    fn handle_confirm_delete_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                let id = std::mem::take(&mut self.state.confirm_delete.group_id);
                self.state.store.delete_request_group(&id);
                self.state.active_popup = ActivePopup::None;
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.state.active_popup = ActivePopup::None;
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.move_selection(3),
            MouseEventKind::ScrollUp => self.move_selection(-3),
            _ => {}
        }
    }

    /// Apply a filter value whose debounce window has passed. Returns whether
    /// anything changed.
    pub fn handle_tick(&mut self, now: Instant) -> bool {
        let debounce = self.state.filter_debounce;
        let Some(value) = self.state.filter_input.take_due(now, debounce) else {
            return false;
        };
        sidebar::on_filter_change(&mut self.state.store, &value);
        self.state.selected = 0;
        self.state.dirty = true;
        true
    }

    /// Push the filter to the store now, skipping the debounce window.
    fn forward_filter(&mut self) {
        if let Some(value) = self.state.filter_input.flush() {
            sidebar::on_filter_change(&mut self.state.store, &value);
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.state.rows().len();
        if len == 0 {
            self.state.selected = 0;
            return;
        }
        let next = self.state.selected.saturating_add_signed(delta);
        self.state.selected = next.min(len - 1);
    }

    fn selected_group_id(&self) -> Option<String> {
        self.state.selected_key().and_then(|k| k.group_id().map(str::to_string))
    }

    fn select_group_header(&mut self, group_id: &str) {
        let pos = self
            .state
            .rows()
            .iter()
            .position(|row| row.key() == RowKey::Group(group_id.to_string()));
        if let Some(pos) = pos {
            self.state.selected = pos;
        }
    }

    /// Group under the cursor, only when the cursor is on its header row.
    fn selected_group_header(&self) -> Option<String> {
        match self.state.selected_key() {
            Some(RowKey::Group(id)) => Some(id),
            _ => None,
        }
    }

    fn open_rename(&mut self) {
        let Some(group_id) = self.selected_group_header() else {
            return;
        };
        let Some(group) = self.state.store.workspace.group(&group_id) else {
            return;
        };
        self.state.naming.input = group.name.clone();
        self.state.naming.cursor = group.name.len();
        self.state.naming.group_id = group_id;
        self.state.active_popup = ActivePopup::RenameGroup;
    }

    fn open_confirm_delete(&mut self) {
        let Some(group_id) = self.selected_group_header() else {
            return;
        };
        let Some(group) = self.state.store.workspace.group(&group_id) else {
            return;
        };
        let doomed = self.state.store.workspace.exclusive_request_ids(&group_id).len();
        self.state.confirm_delete.message =
            format!("Delete \"{}\" and its {} request(s)?", group.name, doomed);
        self.state.confirm_delete.group_id = group_id;
        self.state.active_popup = ActivePopup::ConfirmDelete;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::state::request::{HttpMethod, Request};
    use crate::state::request_group::{ChildRef, RequestGroup};
    use crate::state::workspace::Workspace;

    fn app() -> App {
        let group = RequestGroup {
            id: "g1".into(),
            name: "Users".into(),
            collapsed: false,
            children: vec![ChildRef::new("r1"), ChildRef::new("r2")],
        };
        let ws = Workspace {
            name: "test".into(),
            requests: vec![
                Request::with_id("r0", HttpMethod::Get, "Health"),
                Request::with_id("r1", HttpMethod::Get, "List users"),
                Request::with_id("r2", HttpMethod::Post, "Create user"),
            ],
            request_groups: vec![group],
        };
        App::new(WorkspaceStore::new(ws), &Config::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::from(code)));
    }

    fn type_text(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)), now);
        }
    }

    #[test]
    fn test_enter_on_request_activates_it() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.store.active_request().map(|r| r.id.as_str()), Some("r1"));
    }

    #[test]
    fn test_enter_on_group_header_toggles() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert!(app.state.store.workspace.group("g1").unwrap().collapsed);
        assert_eq!(app.state.rows().len(), 2);
    }

    #[test]
    fn test_space_on_child_collapses_parent_and_selects_header() {
        let mut app = app();
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.state.store.workspace.group("g1").unwrap().collapsed);
        assert_eq!(app.state.selected, 1);
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut app = app();
        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.state.selected, 3);
        for _ in 0..10 {
            press(&mut app, KeyCode::Up);
        }
        assert_eq!(app.state.selected, 0);
    }

    #[test]
    fn test_filter_applies_after_debounce() {
        let mut app = app();
        let t0 = Instant::now();
        app.handle_key(KeyEvent::from(KeyCode::Char('/')), t0);
        assert_eq!(app.state.mode, Mode::Insert);
        type_text(&mut app, "post", t0);

        app.handle_tick(t0 + Duration::from_millis(50));
        assert_eq!(app.state.store.active_filter(), None);

        app.handle_tick(t0 + Duration::from_millis(300));
        assert_eq!(app.state.store.active_filter(), Some("post"));
        assert_eq!(app.state.rows().len(), 2);
    }

    #[test]
    fn test_enter_flushes_filter_immediately() {
        let mut app = app();
        let t0 = Instant::now();
        app.handle_key(KeyEvent::from(KeyCode::Char('/')), t0);
        type_text(&mut app, "health", t0);
        app.handle_key(KeyEvent::from(KeyCode::Enter), t0);
        assert_eq!(app.state.store.active_filter(), Some("health"));
        assert_eq!(app.state.mode, Mode::Normal);
        assert_eq!(app.state.focus, Focus::Sidebar);
    }

    #[test]
    fn test_escape_clears_then_leaves_filter() {
        let mut app = app();
        let t0 = Instant::now();
        app.handle_key(KeyEvent::from(KeyCode::Char('/')), t0);
        type_text(&mut app, "x", t0);
        app.handle_key(KeyEvent::from(KeyCode::Enter), t0);
        app.handle_key(KeyEvent::from(KeyCode::Char('/')), t0);
        app.handle_key(KeyEvent::from(KeyCode::Esc), t0);
        assert_eq!(app.state.store.active_filter(), None);
        assert_eq!(app.state.mode, Mode::Insert);
        app.handle_key(KeyEvent::from(KeyCode::Esc), t0);
        assert_eq!(app.state.mode, Mode::Normal);
    }

    #[test]
    fn test_add_request_on_group_row() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('a'));
        let active = app.state.store.active_request().unwrap().id.clone();
        assert!(app.state.store.workspace.group("g1").unwrap().contains(&active));
        assert_eq!(app.state.selected, 4);
    }

    #[test]
    fn test_rename_group_via_popup() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.state.active_popup, ActivePopup::RenameGroup);
        for _ in 0.."Users".len() {
            press(&mut app, KeyCode::Backspace);
        }
        for c in "Accounts".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.active_popup, ActivePopup::None);
        assert_eq!(app.state.store.workspace.group("g1").unwrap().name, "Accounts");
    }

    #[test]
    fn test_delete_group_needs_confirmation() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('n'));
        assert!(app.state.store.workspace.group("g1").is_some());

        press(&mut app, KeyCode::Char('d'));
        assert!(app.state.confirm_delete.message.contains("Users"));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.state.store.workspace.group("g1").is_none());
        assert_eq!(app.state.rows().len(), 1);
        assert_eq!(app.state.selected, 0);
    }

    #[test]
    fn test_rename_ignored_on_ungrouped_row() {
        let mut app = app();
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.state.active_popup, ActivePopup::None);
    }

    #[test]
    fn test_idle_tick_leaves_selection_and_redraw_alone() {
        let mut app = app();
        app.state.selected = 99;
        app.state.dirty = false;
        app.handle_event(Event::Tick);
        assert_eq!(app.state.selected, 99);
        assert!(!app.state.dirty);
    }

    #[test]
    fn test_tick_that_lands_filter_reports_change() {
        let mut app = app();
        let t0 = Instant::now();
        app.handle_key(KeyEvent::from(KeyCode::Char('/')), t0);
        type_text(&mut app, "user", t0);
        assert!(!app.handle_tick(t0));
        assert!(app.handle_tick(t0 + Duration::from_secs(1)));
        assert!(!app.handle_tick(t0 + Duration::from_secs(2)));
    }

    #[test]
    fn test_rename_and_delete_ignored_on_request_row() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        assert!(matches!(app.state.selected_key(), Some(RowKey::Request { .. })));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.state.active_popup, ActivePopup::None);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.state.active_popup, ActivePopup::None);
        assert!(app.state.store.workspace.group("g1").is_some());
    }

    #[test]
    fn test_delete_prompt_counts_only_requests_it_removes() {
        let mut app = app();
        let mut other = RequestGroup::new("Writes");
        other.id = "g2".into();
        other.children = vec![ChildRef::new("r2")];
        app.state.store.workspace.request_groups.push(other);

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.state.confirm_delete.message, "Delete \"Users\" and its 1 request(s)?");
        press(&mut app, KeyCode::Char('y'));
        assert!(app.state.store.workspace.request("r2").is_some());
        assert!(app.state.store.workspace.request("r1").is_none());
    }
}
