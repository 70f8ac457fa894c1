//! The datastore seam shared by the poller and the push API.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::{Service, ServiceUpdateRow, WorkflowStatusRow};

/// Status datastore operations.
///
/// Implemented by [`SupabaseStore`](crate::supabase::SupabaseStore) against the
/// real datastore and by [`MemoryStore`](crate::memory::MemoryStore) for tests
/// and local runs. Both update tables are append-only; history queries stay on
/// the dashboard side.
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Look up a service by primary key.
    async fn service_by_id(&self, id: i64) -> Result<Option<Service>, StoreError>;

    /// Look up a service by its unique name.
    async fn service_by_name(&self, name: &str) -> Result<Option<Service>, StoreError>;

    /// Append one derived workflow health row to the `updates` table.
    async fn record_workflow_status(&self, row: &WorkflowStatusRow) -> Result<(), StoreError>;

    /// Append one pushed status row to the `service_updates` table.
    async fn record_service_update(&self, row: &ServiceUpdateRow) -> Result<(), StoreError>;
}
