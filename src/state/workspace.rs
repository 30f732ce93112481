use serde::{Deserialize, Serialize};

use crate::state::request::Request;
use crate::state::request_group::RequestGroup;

/// Persisted workspace (saved to `workspace.toml`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Workspace {
    pub name: String,
    #[serde(default)]
    pub requests: Vec<Request>,
    #[serde(default, alias = "requestGroups")]
    pub request_groups: Vec<RequestGroup>,
}

impl Workspace {
    pub fn empty(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    pub fn request(&self, id: &str) -> Option<&Request> {
        self.requests.iter().find(|r| r.id == id)
    }

    pub fn group(&self, id: &str) -> Option<&RequestGroup> {
        self.request_groups.iter().find(|g| g.id == id)
    }

    pub fn group_mut(&mut self, id: &str) -> Option<&mut RequestGroup> {
        self.request_groups.iter_mut().find(|g| g.id == id)
    }

    /// The group referencing `request_id`, if any.
    pub fn group_of(&self, request_id: &str) -> Option<&RequestGroup> {
        self.request_groups.iter().find(|g| g.contains(request_id))
    }

    /// Requests referenced by `group_id` and by no other group. Deleting the
    /// group removes exactly these.
    pub fn exclusive_request_ids(&self, group_id: &str) -> Vec<String> {
        let Some(group) = self.group(group_id) else {
            return Vec::new();
        };
        let mut ids: Vec<String> = Vec::new();
        for child in &group.children {
            let shared = self
                .request_groups
                .iter()
                .any(|g| g.id != group_id && g.contains(&child.id));
            if !shared && !ids.contains(&child.id) {
                ids.push(child.id.clone());
            }
        }
        ids
    }
}
