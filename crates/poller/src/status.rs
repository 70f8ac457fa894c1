//! Chronological status derivation.

use chrono::{DateTime, Utc};

use crate::model::{Execution, ExecutionOutcome};

/// Persisted status vocabulary for derived rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStatus {
    Success,
    Failed,
}

impl WorkflowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStatus::Success => "success",
            WorkflowStatus::Failed => "failed",
        }
    }
}

/// Health summary of one workflow as of one poll cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    /// Outcome of the most recent run that has a definitive outcome.
    pub status: Option<WorkflowStatus>,
    /// Start time of the most recent run of any kind.
    pub last_execution: Option<DateTime<Utc>>,
    /// Start time of the most recent failed run.
    pub last_error: Option<DateTime<Utc>>,
    /// Start time of the most recent successful run.
    pub last_success: Option<DateTime<Utc>>,
}

/// Reduce an execution history to one snapshot.
///
/// The API guarantees no ordering, so the history is sorted by start time
/// first, then folded in a single pass keeping the latest timestamp per
/// category. Runs without a recorded outcome move `last_execution` forward but
/// leave `status` at the most recent definitive outcome. The sort is stable,
/// so equal timestamps keep their input order.
pub fn derive_snapshot(mut executions: Vec<Execution>) -> StatusSnapshot {
    executions.sort_by_key(|e| e.started_at);

    let mut snapshot = StatusSnapshot {
        status: None,
        last_execution: None,
        last_error: None,
        last_success: None,
    };

    for execution in executions {
        snapshot.last_execution = Some(execution.started_at);
        match execution.outcome() {
            ExecutionOutcome::Succeeded => {
                snapshot.status = Some(WorkflowStatus::Success);
                snapshot.last_success = Some(execution.started_at);
            }
            ExecutionOutcome::Failed => {
                snapshot.status = Some(WorkflowStatus::Failed);
                snapshot.last_error = Some(execution.started_at);
            }
            ExecutionOutcome::Unknown => {}
        }
    }

    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(minute: u32) -> DateTime<Utc> {
        format!("2024-05-01T10:{:02}:00Z", minute).parse().unwrap()
    }

    fn execution(minute: u32, finished: Option<bool>) -> Execution {
        Execution {
            started_at: ts(minute),
            finished,
        }
    }

    #[test]
    fn test_empty_history() {
        let snapshot = derive_snapshot(Vec::new());
        assert_eq!(
            snapshot,
            StatusSnapshot {
                status: None,
                last_execution: None,
                last_error: None,
                last_success: None,
            }
        );
    }

    #[test]
    fn test_success_after_failure() {
        let snapshot = derive_snapshot(vec![
            execution(1, Some(true)),
            execution(2, Some(false)),
            execution(3, Some(true)),
        ]);

        assert_eq!(snapshot.status, Some(WorkflowStatus::Success));
        assert_eq!(snapshot.last_execution, Some(ts(3)));
        assert_eq!(snapshot.last_success, Some(ts(3)));
        assert_eq!(snapshot.last_error, Some(ts(2)));
    }

    #[test]
    fn test_single_failure() {
        let snapshot = derive_snapshot(vec![execution(5, Some(false))]);

        assert_eq!(snapshot.status, Some(WorkflowStatus::Failed));
        assert_eq!(snapshot.last_execution, Some(ts(5)));
        assert_eq!(snapshot.last_error, Some(ts(5)));
        assert_eq!(snapshot.last_success, None);
    }

    #[test]
    fn test_running_execution_keeps_last_definitive_status() {
        let snapshot = derive_snapshot(vec![execution(1, Some(false)), execution(2, None)]);

        assert_eq!(snapshot.status, Some(WorkflowStatus::Failed));
        assert_eq!(snapshot.last_execution, Some(ts(2)));
        assert_eq!(snapshot.last_error, Some(ts(1)));
        assert_eq!(snapshot.last_success, None);
    }

    #[test]
    fn test_only_running_executions_yield_no_status() {
        let snapshot = derive_snapshot(vec![execution(1, None), execution(2, None)]);

        assert_eq!(snapshot.status, None);
        assert_eq!(snapshot.last_execution, Some(ts(2)));
        assert_eq!(snapshot.last_error, None);
        assert_eq!(snapshot.last_success, None);
    }

    #[test]
    fn test_order_independent() {
        let ordered = derive_snapshot(vec![
            execution(1, Some(true)),
            execution(2, Some(false)),
            execution(3, Some(true)),
        ]);
        let shuffled = derive_snapshot(vec![
            execution(3, Some(true)),
            execution(1, Some(true)),
            execution(2, Some(false)),
        ]);

        assert_eq!(ordered, shuffled);
    }

    #[test]
    fn test_equal_timestamps_keep_input_order() {
        let snapshot = derive_snapshot(vec![execution(1, Some(true)), execution(1, Some(false))]);

        assert_eq!(snapshot.status, Some(WorkflowStatus::Failed));
        assert_eq!(snapshot.last_success, Some(ts(1)));
        assert_eq!(snapshot.last_error, Some(ts(1)));
    }
}
