//! Issue creation request.

use crate::assignees::Assignees;
use serde::Serialize;

/// The payload sent to create an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueRequest {
    /// Issue title.
    pub title: String,

    /// Issue body, possibly empty.
    pub body: String,

    /// Handles to assign. Left out of the payload when absent.
    #[serde(skip_serializing_if = "Assignees::is_absent")]
    pub assignees: Assignees,
}
