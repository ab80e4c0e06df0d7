//! Runner error types.

use crate::inputs::InputError;
use crate::issues::SubmissionError;
use crate::workflow::OutputError;

/// Errors that can end a run.
///
/// Every variant displays as its underlying message; that text is the
/// failure reason published to the workflow.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// A required input was not supplied.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Authentication or the create-issue call failed.
    #[error(transparent)]
    Submission(#[from] SubmissionError),

    /// The created issue could not be published as a step output.
    #[error(transparent)]
    Output(#[from] OutputError),
}
