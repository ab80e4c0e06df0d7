//! Inputs resolved for a run.

use crate::assignees::Assignees;
use crate::inputs::{get_input, InputError, InputOptions, InputSource};
use crate::issues::IssueRequest;
use std::fmt;

/// Everything the submission step needs from the step inputs.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedInputs {
    /// Token used to authenticate the call.
    pub token: String,

    /// The issue to create.
    pub request: IssueRequest,
}

impl ResolvedInputs {
    /// Reads `token`, `title`, `body` and `assignees`, in that order,
    /// stopping at the first missing required input.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::MissingRequired`] if `token` or `title` is
    /// missing.
    pub fn resolve(source: &impl InputSource) -> Result<Self, InputError> {
        let token = get_input(source, "token", InputOptions::required())?;
        let title = get_input(source, "title", InputOptions::required())?;
        let body = get_input(source, "body", InputOptions::optional())?;
        let assignees = get_input(source, "assignees", InputOptions::optional().untrimmed())?;

        Ok(Self {
            token,
            request: IssueRequest {
                title,
                body,
                assignees: Assignees::parse(&assignees),
            },
        })
    }

    /// Returns the debug traces for the resolved inputs, in emission order.
    #[must_use]
    pub fn traces(&self) -> [String; 3] {
        [
            format!("Title: {}", self.request.title),
            format!("Body: {}", self.request.body),
            format!("@: {}", self.request.assignees),
        ]
    }
}

impl fmt::Debug for ResolvedInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedInputs")
            .field("token", &"***")
            .field("request", &self.request)
            .finish()
    }
}
