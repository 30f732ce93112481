use std::time::Duration;

use super::{filter_input::FilterInput, focus::Focus, mode::Mode};
use crate::config::Config;
use crate::sidebar::{RowKey, SidebarRow};
use crate::store::WorkspaceStore;

/// Which overlay popup (if any) is currently visible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActivePopup {
    #[default]
    None,
    RenameGroup,
    ConfirmDelete,
}

/// State for the rename popup.
#[derive(Debug, Clone, Default)]
pub struct NamingState {
    pub group_id: String,
    pub input: String,
    pub cursor: usize,
}

/// State for the delete confirmation popup.
#[derive(Debug, Clone, Default)]
pub struct ConfirmDeleteState {
    pub group_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub mode: Mode,
    pub focus: Focus,
    pub store: WorkspaceStore,
    pub filter_input: FilterInput,
    /// Index into the flattened sidebar rows.
    pub selected: usize,
    pub active_popup: ActivePopup,
    pub naming: NamingState,
    pub confirm_delete: ConfirmDeleteState,
    pub sidebar_width: u16,
    pub filter_debounce: Duration,
    pub should_quit: bool,
    /// Set whenever visible state changes; the render loop skips drawing otherwise.
    pub dirty: bool,
}

impl AppState {
    pub fn new(store: WorkspaceStore, config: &Config) -> Self {
        Self {
            store,
            sidebar_width: config.sidebar_width,
            filter_debounce: config.filter_debounce(),
            dirty: true,
            ..Default::default()
        }
    }

    pub fn rows(&self) -> Vec<SidebarRow<'_>> {
        self.store.props().render()
    }

    pub fn selected_key(&self) -> Option<RowKey> {
        self.rows().get(self.selected).map(SidebarRow::key)
    }

    /// Keep the selection inside the current row list.
    pub fn clamp_selection(&mut self) {
        let len = self.rows().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Move the selection onto the active request's row, if it is visible.
    pub fn select_active_request(&mut self) {
        let pos = self
            .rows()
            .iter()
            .position(|row| matches!(row, SidebarRow::Request(r) if r.active));
        if let Some(pos) = pos {
            self.selected = pos;
        }
    }
}
