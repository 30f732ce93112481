use crate::sidebar::tree::RowKey;
use crate::state::request_group::RequestGroupPatch;

/// Mutators the sidebar dispatches to. Implemented by whoever owns the
/// requests and groups; the sidebar only ever calls them.
pub trait SidebarActions {
    fn activate_request(&mut self, id: &str);
    /// Create a request inside `group_id`, or ungrouped when `None`.
    fn add_request(&mut self, group_id: Option<&str>);
    fn change_filter(&mut self, value: &str);
    fn toggle_request_group(&mut self, id: &str);
    fn delete_request_group(&mut self, id: &str);
    fn update_request_group(&mut self, id: &str, patch: RequestGroupPatch);
}

/// Forward an already-debounced filter value upward.
pub fn on_filter_change<A: SidebarActions + ?Sized>(actions: &mut A, value: &str) {
    actions.change_filter(value);
}

/// Press on a row: requests activate, group headers toggle, the
/// placeholder is disabled. Returns whether anything was dispatched.
pub fn activate_row<A: SidebarActions + ?Sized>(actions: &mut A, row: &RowKey) -> bool {
    match row {
        RowKey::Request { id, .. } => {
            actions.activate_request(id);
            true
        }
        RowKey::Group(id) => {
            actions.toggle_request_group(id);
            true
        }
        RowKey::Empty { .. } => false,
    }
}

/// The "+" button on a group header, or on any row inside it.
pub fn add_request_at<A: SidebarActions + ?Sized>(actions: &mut A, row: Option<&RowKey>) {
    actions.add_request(row.and_then(RowKey::group_id));
}
