//! HTTP handlers for the statuswatch server API.

pub mod health;
pub mod status;

pub use health::root;
pub use status::update_status;
