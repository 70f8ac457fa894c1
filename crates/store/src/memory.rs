//! In-memory implementation of the status store.
//!
//! Backs tests and local development. Mirrors the relational contract of the
//! Supabase backend, including the append-only update tables, and counts every
//! operation so tests can assert that a code path never touched the datastore.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::model::{Service, ServiceUpdateRow, WorkflowStatusRow};
use crate::traits::StatusStore;

/// Mutex-guarded tables plus an operation counter.
#[derive(Default)]
pub struct MemoryStore {
    services: Mutex<Vec<Service>>,
    updates: Mutex<Vec<WorkflowStatusRow>>,
    service_updates: Mutex<Vec<ServiceUpdateRow>>,
    ops: AtomicUsize,
    fail_inserts: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with the given service registry.
    pub fn with_services(services: Vec<Service>) -> Self {
        Self {
            services: Mutex::new(services),
            ..Self::default()
        }
    }

    /// Make subsequent inserts fail as if the datastore rejected the row.
    pub fn fail_inserts(&self, fail: bool) {
        self.fail_inserts.store(fail, Ordering::SeqCst);
    }

    /// Number of store operations performed so far.
    pub fn op_count(&self) -> usize {
        self.ops.load(Ordering::SeqCst)
    }

    /// Snapshot of the `updates` table.
    pub async fn updates(&self) -> Vec<WorkflowStatusRow> {
        self.updates.lock().await.clone()
    }

    /// Snapshot of the `service_updates` table.
    pub async fn service_updates(&self) -> Vec<ServiceUpdateRow> {
        self.service_updates.lock().await.clone()
    }
}

#[async_trait]
impl StatusStore for MemoryStore {
    async fn service_by_id(&self, id: i64) -> Result<Option<Service>, StoreError> {
        self.ops.fetch_add(1, Ordering::SeqCst);
        let services = self.services.lock().await;
        Ok(services.iter().find(|s| s.id == id).cloned())
    }

    async fn service_by_name(&self, name: &str) -> Result<Option<Service>, StoreError> {
        self.ops.fetch_add(1, Ordering::SeqCst);
        let services = self.services.lock().await;
        Ok(services.iter().find(|s| s.name == name).cloned())
    }

    async fn record_workflow_status(&self, row: &WorkflowStatusRow) -> Result<(), StoreError> {
        self.ops.fetch_add(1, Ordering::SeqCst);
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(StoreError::NoRowsInserted { table: "updates" });
        }
        self.updates.lock().await.push(row.clone());
        Ok(())
    }

    async fn record_service_update(&self, row: &ServiceUpdateRow) -> Result<(), StoreError> {
        self.ops.fetch_add(1, Ordering::SeqCst);
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(StoreError::NoRowsInserted {
                table: "service_updates",
            });
        }
        self.service_updates.lock().await.push(row.clone());
        Ok(())
    }
}
