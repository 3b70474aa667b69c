//! Shared record shapes stored in caches by the orchestration commands
//!
//! The cache core treats these as opaque payloads and enforces no
//! invariants on their fields; the shapes live here so the `run` and
//! `orchestrate` commands agree on them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Task Entry ==
/// A task execution record, as memoized by the `run` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskEntry {
    /// Task identifier
    pub id: String,
    /// Current task status
    pub status: String,
    /// Task output, once available
    pub result: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl TaskEntry {
    // == Constructor ==
    /// Creates a new task entry with both timestamps set to now.
    pub fn new(id: impl Into<String>, status: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            status: status.into(),
            result: None,
            created_at: now,
            updated_at: now,
        }
    }

    // == Set Status ==
    /// Replaces the status and refreshes `updated_at`.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.updated_at = Utc::now();
    }

    // == Set Result ==
    /// Records the task output and refreshes `updated_at`.
    pub fn set_result(&mut self, result: impl Into<String>) {
        self.result = Some(result.into());
        self.updated_at = Utc::now();
    }
}
