pub mod confirm_delete;
pub mod detail;
pub mod layout;
pub mod method_tag;
pub mod naming_popup;
pub mod popup;
pub mod sidebar;
pub mod status_bar;
