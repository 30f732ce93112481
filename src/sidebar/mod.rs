//! The request-tree sidebar: a pure view over requests and groups.
//!
//! Nothing in here owns state. [`SidebarProps`] borrows the store for one
//! render and flattens it into [`SidebarRow`]s; user input goes back out
//! through [`SidebarActions`].

pub mod actions;
pub mod filter;
pub mod tree;

pub use actions::{SidebarActions, activate_row, add_request_at, on_filter_change};
pub use filter::RequestFilter;
pub use tree::{FolderIcon, GroupRow, RequestRow, RowKey, SidebarProps, SidebarRow};
