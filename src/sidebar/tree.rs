use std::collections::HashSet;

use crate::sidebar::filter::{self, RequestFilter};
use crate::state::request::Request;
use crate::state::request_group::RequestGroup;

/// Everything the sidebar renders from. Borrowed from the store for one
/// render pass; the sidebar never keeps it around.
#[derive(Debug, Clone, Copy)]
pub struct SidebarProps<'a> {
    pub requests: &'a [Request],
    pub request_groups: &'a [RequestGroup],
    pub active_request: Option<&'a Request>,
    pub active_filter: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderIcon {
    Closed,
    ClosedActive,
    Open,
    OpenActive,
}

impl FolderIcon {
    fn new(expanded: bool, active: bool) -> Self {
        match (expanded, active) {
            (false, false) => FolderIcon::Closed,
            (false, true) => FolderIcon::ClosedActive,
            (true, false) => FolderIcon::Open,
            (true, true) => FolderIcon::OpenActive,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            FolderIcon::Closed => "▹",
            FolderIcon::ClosedActive => "▸",
            FolderIcon::Open => "▿",
            FolderIcon::OpenActive => "▾",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRow<'a> {
    pub group: &'a RequestGroup,
    pub expanded: bool,
    pub active: bool,
    /// Children left after filtering.
    pub matching: usize,
}

impl GroupRow<'_> {
    pub fn icon(&self) -> FolderIcon {
        FolderIcon::new(self.expanded, self.active)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRow<'a> {
    pub request: &'a Request,
    pub group: Option<&'a RequestGroup>,
    pub active: bool,
}

/// One line of the flattened tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarRow<'a> {
    Group(GroupRow<'a>),
    Request(RequestRow<'a>),
    /// Disabled "No Requests" placeholder inside an expanded, empty group.
    Empty { group: Option<&'a RequestGroup> },
}

/// Owned identity of a row, so it can outlive the borrow of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKey {
    Group(String),
    Request { id: String, group_id: Option<String> },
    Empty { group_id: Option<String> },
}

impl SidebarRow<'_> {
    pub fn key(&self) -> RowKey {
        match self {
            SidebarRow::Group(row) => RowKey::Group(row.group.id.clone()),
            SidebarRow::Request(row) => RowKey::Request {
                id: row.request.id.clone(),
                group_id: row.group.map(|g| g.id.clone()),
            },
            SidebarRow::Empty { group } => RowKey::Empty {
                group_id: group.map(|g| g.id.clone()),
            },
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            SidebarRow::Group(row) => row.active,
            SidebarRow::Request(row) => row.active,
            SidebarRow::Empty { .. } => false,
        }
    }

    /// Nesting level: group headers and ungrouped requests sit at 0.
    pub fn depth(&self) -> u16 {
        match self {
            SidebarRow::Group(_) => 0,
            SidebarRow::Request(row) => u16::from(row.group.is_some()),
            SidebarRow::Empty { group } => u16::from(group.is_some()),
        }
    }
}

impl RowKey {
    /// The group this row belongs to, or is.
    pub fn group_id(&self) -> Option<&str> {
        match self {
            RowKey::Group(id) => Some(id.as_str()),
            RowKey::Request { group_id, .. } | RowKey::Empty { group_id } => group_id.as_deref(),
        }
    }
}

impl<'a> SidebarProps<'a> {
    pub fn filter_active(&self) -> bool {
        filter::is_active(self.active_filter)
    }

    /// The full tree: ungrouped requests first, then each group in order.
    /// The filter runs once over all requests; groups pick from the result.
    pub fn render(&self) -> Vec<SidebarRow<'a>> {
        let filtered = self.filtered_requests();
        let mut rows = self.ungrouped_rows(&filtered);
        for group in self.request_groups {
            rows.extend(self.group_rows(group, &filtered));
        }
        rows
    }

    /// Rows for one group (header plus visible children), or the ungrouped
    /// requests when `group` is `None`. Empty when the group is filtered out.
    pub fn render_request_group_row(&self, group: Option<&'a RequestGroup>) -> Vec<SidebarRow<'a>> {
        let filtered = self.filtered_requests();
        match group {
            Some(group) => self.group_rows(group, &filtered),
            None => self.ungrouped_rows(&filtered),
        }
    }

    fn filtered_requests(&self) -> Vec<&'a Request> {
        RequestFilter::from_active(self.active_filter).apply(self.requests)
    }

    fn ungrouped_rows(&self, filtered: &[&'a Request]) -> Vec<SidebarRow<'a>> {
        let grouped: HashSet<&str> = self
            .request_groups
            .iter()
            .flat_map(|g| g.children.iter().map(|c| c.id.as_str()))
            .collect();
        filtered
            .iter()
            .copied()
            .filter(|r| !grouped.contains(r.id.as_str()))
            .map(|r| self.render_request_row(Some(r), None))
            .collect()
    }

    fn group_rows(&self, group: &'a RequestGroup, filtered: &[&'a Request]) -> Vec<SidebarRow<'a>> {
        let child_ids: HashSet<&str> = group.children.iter().map(|c| c.id.as_str()).collect();
        let children: Vec<&'a Request> = filtered
            .iter()
            .copied()
            .filter(|r| child_ids.contains(r.id.as_str()))
            .collect();

        let filter_active = self.filter_active();
        if filter_active && children.is_empty() {
            return Vec::new();
        }

        let active = self
            .active_request
            .is_some_and(|active| children.iter().any(|r| r.id == active.id));
        let expanded = !group.collapsed || filter_active;

        let mut rows = vec![SidebarRow::Group(GroupRow {
            group,
            expanded,
            active,
            matching: children.len(),
        })];
        if expanded {
            if children.is_empty() {
                rows.push(self.render_request_row(None, Some(group)));
            } else {
                rows.extend(children.into_iter().map(|r| self.render_request_row(Some(r), Some(group))));
            }
        }
        rows
    }

    pub fn render_request_row(
        &self,
        request: Option<&'a Request>,
        group: Option<&'a RequestGroup>,
    ) -> SidebarRow<'a> {
        match request {
            Some(request) => {
                let active = self.active_request.is_some_and(|a| a.id == request.id);
                SidebarRow::Request(RequestRow { request, group, active })
            }
            None => SidebarRow::Empty { group },
        }
    }
}
