//! Statuswatch datastore layer.
//!
//! Both halves of statuswatch write status history through the [`StatusStore`]
//! trait: the poller records derived per-workflow health rows, the push API
//! records rows sent by external tools. Two implementations are provided:
//!
//! - [`SupabaseStore`]: Supabase REST (PostgREST) client, the production backend
//! - [`MemoryStore`]: in-memory tables for tests and local runs
//!
//! Tables: `services` (registry the dashboards read), `updates` (poll-path
//! rows), `service_updates` (push-path rows).

pub mod config;
pub mod error;
pub mod memory;
pub mod model;
pub mod supabase;
pub mod traits;

pub use config::SupabaseConfig;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use model::{Service, ServiceUpdateRow, WorkflowStatusRow};
pub use supabase::SupabaseStore;
pub use traits::StatusStore;
