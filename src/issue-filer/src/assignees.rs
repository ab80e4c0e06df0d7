//! Assignee list parsing.

use serde::Serialize;
use std::fmt;

/// Handles to assign to the new issue, or no assignees at all.
///
/// The absent case is distinct from an empty list: it is what an empty
/// `assignees` input produces, it is left out of the request body, and it
/// displays as `undefined`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Assignees(Option<Vec<String>>);

impl Assignees {
    /// Parses a newline-separated list of handles.
    ///
    /// Lines are kept in order and as-is: nothing is trimmed, filtered or
    /// deduplicated, so a trailing newline yields a trailing empty handle.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self(None);
        }
        Self(Some(raw.split('\n').map(str::to_owned).collect()))
    }

    /// Returns the absent marker.
    #[must_use]
    pub const fn absent() -> Self {
        Self(None)
    }

    /// Returns true if no assignees were supplied.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the handles, if any were supplied.
    #[must_use]
    pub fn handles(&self) -> Option<&[String]> {
        self.0.as_deref()
    }
}

impl From<Vec<String>> for Assignees {
    fn from(handles: Vec<String>) -> Self {
        Self(Some(handles))
    }
}

impl fmt::Display for Assignees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None => f.write_str("undefined"),
            Some(handles) => {
                let json = serde_json::to_string(handles).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}
