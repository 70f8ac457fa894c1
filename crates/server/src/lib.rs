//! Statuswatch server.
//!
//! Authenticated push API for service status updates. External monitoring
//! tools POST one status row per request; rows land in the `service_updates`
//! table the dashboards read.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use error::{AppError, AppResult};
pub use router::build_router;
pub use state::AppState;
