//! Identifier and status types for remote threads and runs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a conversation thread held by the remote service.
///
/// Created by the remote service on thread creation and treated as a unique
/// token with no further structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreadId(String);

impl ThreadId {
    /// Returns the raw identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ThreadId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for ThreadId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// Opaque identifier of an assistant run executing on a thread.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(String);

impl RunId {
    /// Returns the raw identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RunId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for RunId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// Status reported by the remote service for an assistant run.
///
/// Only [`RunStatus::Completed`] is a success terminal for polling; every
/// other status, including the failure terminals the service may report,
/// keeps the poller waiting until its deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// The run is queued and has not started.
    Queued,
    /// The assistant is working on the thread.
    InProgress,
    /// The run finished and its reply is on the thread.
    Completed,
    /// The remote service reported the run as failed.
    Failed,
    /// The run was cancelled on the remote side.
    Cancelled,
    /// The run expired before completing.
    Expired,
    /// Any status string this connector does not recognize.
    Other(String),
}

impl RunStatus {
    /// Parses the raw `status` field of a run response.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "queued" => Self::Queued,
            "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            "cancelled" => Self::Cancelled,
            "expired" => Self::Expired,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns `true` for the one status that ends a poll successfully.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}
