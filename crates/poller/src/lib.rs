//! Statuswatch poller.
//!
//! Walks every active workflow on an n8n instance, accumulates each one's full
//! execution history through the paginated executions endpoint, reduces the
//! history to a health snapshot, and records one row per workflow in the
//! status datastore.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod paginate;
pub mod poll;
pub mod status;

pub use client::N8nClient;
pub use config::{N8nConfig, PollerConfig};
pub use error::PollError;
pub use poll::Poller;
