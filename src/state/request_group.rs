use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference from a group to a request it contains. Groups never own requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildRef {
    pub id: String,
}

impl ChildRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// A folder-like container referencing requests by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub collapsed: bool,
    #[serde(default)]
    pub children: Vec<ChildRef>,
}

impl RequestGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            collapsed: false,
            children: Vec::new(),
        }
    }

    pub fn contains(&self, request_id: &str) -> bool {
        self.children.iter().any(|c| c.id == request_id)
    }
}

/// Partial update applied by `update_request_group`. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestGroupPatch {
    pub name: Option<String>,
    pub collapsed: Option<bool>,
}

impl RequestGroupPatch {
    pub fn rename(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Default::default() }
    }

    pub fn apply(&self, group: &mut RequestGroup) {
        if let Some(name) = &self.name {
            group.name = name.clone();
        }
        if let Some(collapsed) = self.collapsed {
            group.collapsed = collapsed;
        }
    }
}
