pub mod app_state;
pub mod filter_input;
pub mod focus;
pub mod mode;
pub mod request;
pub mod request_group;
pub mod workspace;
