//! n8n public API record types.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A workflow definition as returned by `GET /workflows`.
#[derive(Debug, Clone, Deserialize)]
pub struct Workflow {
    /// Opaque workflow identifier; absent in some degenerate records.
    pub id: Option<String>,

    /// Display name, shared with the service registry.
    #[serde(default = "default_name")]
    pub name: String,

    /// Whether the workflow is currently enabled.
    #[serde(default)]
    pub active: bool,
}

fn default_name() -> String {
    "Unknown".to_string()
}

/// The two listing envelopes n8n versions use for `GET /workflows`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WorkflowList {
    Enveloped { data: Vec<Workflow> },
    Bare(Vec<Workflow>),
}

impl WorkflowList {
    pub fn into_workflows(self) -> Vec<Workflow> {
        match self {
            WorkflowList::Enveloped { data } => data,
            WorkflowList::Bare(workflows) => workflows,
        }
    }
}

/// One run of a workflow as returned by `GET /executions`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    /// Start time; the only ordering key the API guarantees.
    pub started_at: DateTime<Utc>,

    /// Completion flag. Absent while the run is in flight or when the
    /// instance never recorded an outcome.
    pub finished: Option<bool>,
}

/// Run outcome with the in-flight case kept distinct from failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionOutcome {
    Succeeded,
    Failed,
    Unknown,
}

impl Execution {
    pub fn outcome(&self) -> ExecutionOutcome {
        match self.finished {
            Some(true) => ExecutionOutcome::Succeeded,
            Some(false) => ExecutionOutcome::Failed,
            None => ExecutionOutcome::Unknown,
        }
    }
}

/// One page of executions with the continuation cursor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionPage {
    #[serde(default)]
    pub data: Vec<Execution>,

    /// Opaque cursor for the next page; absent on the final page.
    pub next_cursor: Option<String>,
}
