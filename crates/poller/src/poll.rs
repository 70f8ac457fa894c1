//! One poll cycle: enumerate, paginate, derive, persist.

use std::sync::Arc;

use statuswatch_store::{StatusStore, WorkflowStatusRow};

use crate::client::N8nClient;
use crate::config::PollerConfig;
use crate::error::PollError;
use crate::paginate::collect_executions;
use crate::status::derive_snapshot;

/// Drives one polling pass over every active workflow.
pub struct Poller {
    n8n: N8nClient,
    store: Arc<dyn StatusStore>,
    tool_name: String,
}

impl Poller {
    /// Create a new poller.
    pub fn new(n8n: N8nClient, store: Arc<dyn StatusStore>, config: &PollerConfig) -> Self {
        Self {
            n8n,
            store,
            tool_name: config.tool_name.clone(),
        }
    }

    /// Run a single poll cycle.
    ///
    /// Workflows are processed strictly in sequence. The first error aborts
    /// the cycle; rows already written stay in place. Workflows without an id
    /// or without a registered service are skipped with a warning, not an
    /// error.
    pub async fn run_cycle(&self) -> Result<(), PollError> {
        let workflows = self.n8n.workflows(Some(true)).await.map_err(|e| {
            tracing::error!(error = %e, "Workflow enumeration failed");
            e
        })?;

        tracing::info!(count = workflows.len(), "Retrieved active workflows");

        let mut recorded = 0usize;
        let mut total_executions = 0usize;

        for workflow in &workflows {
            let Some(workflow_id) = workflow.id.as_deref() else {
                tracing::warn!(name = %workflow.name, "Skipping workflow with missing id");
                continue;
            };

            tracing::info!(
                workflow_id = %workflow_id,
                name = %workflow.name,
                "Processing workflow"
            );

            let executions = collect_executions(&self.n8n, workflow_id).await.map_err(|e| {
                tracing::error!(
                    workflow_id = %workflow_id,
                    name = %workflow.name,
                    error = %e,
                    "Execution history fetch failed"
                );
                e
            })?;

            total_executions += executions.len();
            let snapshot = derive_snapshot(executions);

            let service = self
                .store
                .service_by_name(&workflow.name)
                .await
                .map_err(|e| {
                    tracing::error!(
                        workflow_id = %workflow_id,
                        name = %workflow.name,
                        error = %e,
                        "Service lookup failed"
                    );
                    e
                })?;

            let Some(service) = service else {
                tracing::warn!(
                    workflow_id = %workflow_id,
                    name = %workflow.name,
                    "No service registered for workflow, skipping"
                );
                continue;
            };

            let row = WorkflowStatusRow {
                service_id: service.id,
                tool_name: self.tool_name.clone(),
                status: snapshot.status.map(|s| s.as_str().to_string()),
                message: None,
                last_execution: snapshot.last_execution,
                last_error: snapshot.last_error,
                last_success: snapshot.last_success,
            };

            self.store.record_workflow_status(&row).await.map_err(|e| {
                tracing::error!(
                    workflow_id = %workflow_id,
                    name = %workflow.name,
                    error = %e,
                    "Status row insert failed"
                );
                e
            })?;
            recorded += 1;

            tracing::info!(
                workflow_id = %workflow_id,
                service_id = service.id,
                status = row.status.as_deref().unwrap_or("none"),
                "Workflow status recorded"
            );
        }

        tracing::info!(
            workflows = workflows.len(),
            recorded,
            executions = total_executions,
            "Poll cycle complete"
        );

        Ok(())
    }
}
