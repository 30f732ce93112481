use crate::sidebar::{SidebarActions, SidebarProps};
use crate::state::request::Request;
use crate::state::request_group::{ChildRef, RequestGroupPatch};
use crate::state::workspace::Workspace;

pub const NEW_REQUEST_NAME: &str = "New Request";

/// Owns the workspace plus the selection and filter the sidebar renders.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceStore {
    pub workspace: Workspace,
    active_request_id: Option<String>,
    active_filter: Option<String>,
}

impl WorkspaceStore {
    pub fn new(workspace: Workspace) -> Self {
        Self { workspace, ..Default::default() }
    }

    pub fn active_request(&self) -> Option<&Request> {
        self.active_request_id
            .as_deref()
            .and_then(|id| self.workspace.request(id))
    }

    pub fn active_filter(&self) -> Option<&str> {
        self.active_filter.as_deref()
    }

    pub fn props(&self) -> SidebarProps<'_> {
        SidebarProps {
            requests: &self.workspace.requests,
            request_groups: &self.workspace.request_groups,
            active_request: self.active_request(),
            active_filter: self.active_filter(),
        }
    }

    /// Like [`SidebarActions::add_request`], returning the new request's id.
    pub fn create_request(&mut self, group_id: Option<&str>) -> String {
        let request = Request::new(NEW_REQUEST_NAME);
        let id = request.id.clone();
        self.workspace.requests.push(request);

        match group_id.and_then(|gid| self.workspace.group_mut(gid)) {
            Some(group) => {
                group.children.push(ChildRef::new(id.clone()));
                tracing::debug!(request = %id, group = %group.id, "added request to group");
            }
            None => {
                if let Some(gid) = group_id {
                    tracing::warn!(group = %gid, "unknown request group, adding request ungrouped");
                }
                tracing::debug!(request = %id, "added ungrouped request");
            }
        }

        self.active_request_id = Some(id.clone());
        id
    }
}

impl SidebarActions for WorkspaceStore {
    fn activate_request(&mut self, id: &str) {
        if self.workspace.request(id).is_none() {
            tracing::warn!(request = %id, "activate: unknown request");
            return;
        }
        tracing::debug!(request = %id, "activate request");
        self.active_request_id = Some(id.to_string());
    }

    fn add_request(&mut self, group_id: Option<&str>) {
        self.create_request(group_id);
    }

    fn change_filter(&mut self, value: &str) {
        tracing::debug!(filter = %value, "change filter");
        self.active_filter = if value.is_empty() { None } else { Some(value.to_string()) };
    }

    fn toggle_request_group(&mut self, id: &str) {
        match self.workspace.group_mut(id) {
            Some(group) => {
                group.collapsed = !group.collapsed;
                tracing::debug!(group = %id, collapsed = group.collapsed, "toggle request group");
            }
            None => tracing::warn!(group = %id, "toggle: unknown request group"),
        }
    }

    fn delete_request_group(&mut self, id: &str) {
        let Some(pos) = self.workspace.request_groups.iter().position(|g| g.id == id) else {
            tracing::warn!(group = %id, "delete: unknown request group");
            return;
        };
        // Requests still referenced by another group stay.
        let doomed = self.workspace.exclusive_request_ids(id);
        self.workspace.request_groups.remove(pos);
        self.workspace.requests.retain(|r| !doomed.contains(&r.id));
        if self
            .active_request_id
            .as_ref()
            .is_some_and(|active| doomed.contains(active))
        {
            self.active_request_id = None;
        }
        tracing::debug!(group = %id, removed = doomed.len(), "delete request group");
    }

    fn update_request_group(&mut self, id: &str, patch: RequestGroupPatch) {
        match self.workspace.group_mut(id) {
            Some(group) => {
                patch.apply(group);
                tracing::debug!(group = %id, ?patch, "update request group");
            }
            None => tracing::warn!(group = %id, "update: unknown request group"),
        }
    }
}
