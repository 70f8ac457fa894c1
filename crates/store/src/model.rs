//! Row types for the status tables.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A monitored service from the `services` registry table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Primary key referenced by both update tables
    pub id: i64,

    /// Unique service name shown on the dashboards
    pub name: String,
}

/// One derived per-workflow health row for the `updates` table.
///
/// Written by the poller, one row per workflow per cycle. Timestamp columns
/// stay null until the matching kind of run has been observed at least once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStatusRow {
    pub service_id: i64,
    pub tool_name: String,
    pub status: Option<String>,
    pub message: Option<String>,
    pub last_execution: Option<DateTime<Utc>>,
    pub last_error: Option<DateTime<Utc>>,
    pub last_success: Option<DateTime<Utc>>,
}

/// One pushed status row for the `service_updates` table.
///
/// Written by the push API. The insert timestamp is filled by the database
/// default, so it does not appear here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceUpdateRow {
    pub service_id: i64,
    pub status: String,
    pub message: Option<String>,
    pub tool_name: String,
}
