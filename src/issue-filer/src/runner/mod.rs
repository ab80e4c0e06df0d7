//! Runs the issue filer from inputs to reported outcome.
//!
//! A run resolves the inputs, files exactly one issue and publishes it as the
//! `issue` output. Any error ends the run with a single failure signal.

mod error;
mod resolved;

pub use error::RunError;
pub use resolved::ResolvedInputs;

use crate::context::RepoContext;
use crate::inputs::InputSource;
use crate::issues::IssueTracker;
use crate::workflow::{OutputError, WorkflowHost};
use serde_json::Value;
use tracing::{error, info, info_span, Instrument};

/// Name of the step output carrying the created issue.
pub const ISSUE_OUTPUT: &str = "issue";

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The issue was created and published.
    Reported(Value),

    /// The run failed with this message.
    Failed(String),
}

impl RunOutcome {
    /// Returns true if the issue was created and published.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Reported(_))
    }
}

/// Files issues in one repository through an [`IssueTracker`].
#[derive(Debug, Clone)]
pub struct IssueFiler<T> {
    tracker: T,
    repository: RepoContext,
}

impl<T: IssueTracker> IssueFiler<T> {
    /// Creates a filer for `repository`.
    pub fn new(tracker: T, repository: RepoContext) -> Self {
        Self {
            tracker,
            repository,
        }
    }

    /// Returns the tracker issues are filed through.
    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    /// Returns the repository issues are filed in.
    pub fn repository(&self) -> &RepoContext {
        &self.repository
    }

    /// Executes one run.
    ///
    /// This function:
    /// 1. Resolves `token`, `title`, `body` and `assignees`
    /// 2. Emits the `Title:`, `Body:` and `@:` debug traces
    /// 3. Files the issue through the tracker, exactly once
    /// 4. Publishes the created issue as the `issue` output
    ///
    /// # Arguments
    ///
    /// * `inputs` - Source of the step inputs
    /// * `host` - Workflow the traces, output and failure are published to
    ///
    /// # Returns
    ///
    /// [`RunOutcome::Reported`] with the created issue, or
    /// [`RunOutcome::Failed`] with the failure message. Errors never escape:
    /// each failed run calls [`WorkflowHost::set_failed`] exactly once and
    /// publishes no output.
    pub async fn run(
        &self,
        inputs: &impl InputSource,
        host: &mut impl WorkflowHost,
    ) -> RunOutcome {
        let span = info_span!("file_issue", repo = %self.repository);

        async {
            match self.try_run(inputs, host).await {
                Ok(issue) => RunOutcome::Reported(issue),
                Err(e) => {
                    error!(error = ?e, "Run failed");
                    let message = e.to_string();
                    host.set_failed(&message);
                    RunOutcome::Failed(message)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn try_run(
        &self,
        inputs: &impl InputSource,
        host: &mut impl WorkflowHost,
    ) -> Result<Value, RunError> {
        let resolved = ResolvedInputs::resolve(inputs)?;
        for trace in resolved.traces() {
            host.debug(&trace);
        }

        info!(title = %resolved.request.title, "Filing issue");
        let issue = self
            .tracker
            .create_issue(&resolved.token, &self.repository, &resolved.request)
            .await?;

        let serialized = serde_json::to_string(&issue).map_err(OutputError::from)?;
        host.set_output(ISSUE_OUTPUT, &serialized)?;

        Ok(issue)
    }
}
