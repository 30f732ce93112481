//! Terminal request-tree sidebar for API clients.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod sidebar;
pub mod state;
pub mod storage;
pub mod store;
pub mod terminal;
pub mod ui;
