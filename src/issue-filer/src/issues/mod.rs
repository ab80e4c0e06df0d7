//! GitHub issue creation.
//!
//! This module defines the [`IssueTracker`] seam the run submits through and
//! its GitHub implementation, [`GitHubTracker`].

mod error;
mod request;

pub use error::SubmissionError;
pub use request::IssueRequest;

use crate::context::RepoContext;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use serde_json::Value;
use std::future::Future;
use tracing::{debug, info, info_span, Instrument};
use url::Url;

/// Default base URL of the GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// A remote tracker that can file issues.
pub trait IssueTracker {
    /// Authenticates with `token` and creates one issue in `repository`.
    ///
    /// Returns the created issue exactly as the tracker described it. The
    /// call is not idempotent: every successful call creates a new issue.
    fn create_issue(
        &self,
        token: &str,
        repository: &RepoContext,
        request: &IssueRequest,
    ) -> impl Future<Output = Result<Value, SubmissionError>> + Send;
}

/// Files issues through the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubTracker {
    base_uri: Url,
}

impl GitHubTracker {
    /// Creates a tracker talking to the API at `base_uri`.
    #[must_use]
    pub fn new(base_uri: Url) -> Self {
        Self { base_uri }
    }

    /// Returns the API base URL.
    #[must_use]
    pub fn base_uri(&self) -> &Url {
        &self.base_uri
    }

    /// Builds a client authenticated with `token`.
    ///
    /// Retries are disabled: creating an issue is not idempotent, so a
    /// retried request can file the same issue twice.
    fn client(&self, token: &str) -> Result<Octocrab, SubmissionError> {
        let octocrab = Octocrab::builder()
            .personal_token(token.to_owned())
            .base_uri(self.base_uri.as_str().trim_end_matches('/'))?
            .add_retry_config(RetryConfig::None)
            .build()?;
        Ok(octocrab)
    }
}

impl IssueTracker for GitHubTracker {
    /// Creates an issue via the GitHub REST API.
    ///
    /// Sends a single `POST /repos/{owner}/{repo}/issues` request. The client
    /// is built and authenticated right before the call.
    ///
    /// # Arguments
    ///
    /// * `token` - Token used for personal-token authentication
    /// * `repository` - Repository to file the issue in
    /// * `request` - Title, body and assignees of the new issue
    ///
    /// # Returns
    ///
    /// The created issue, exactly as the API returned it.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::Rejected`] if the API refused the request
    /// and [`SubmissionError::Client`] for client or transport failures.
    async fn create_issue(
        &self,
        token: &str,
        repository: &RepoContext,
        request: &IssueRequest,
    ) -> Result<Value, SubmissionError> {
        let span = info_span!("create_issue", repo = %repository);

        async {
            debug!(api = %self.base_uri, "Authenticating");
            let octocrab = self.client(token)?;

            let route = format!("/repos/{}/{}/issues", repository.owner, repository.repo);
            let issue: Value = octocrab.post(route, Some(request)).await?;

            let number = issue.get("number").and_then(Value::as_u64);
            info!(issue_number = number, "Issue created");
            Ok(issue)
        }
        .instrument(span)
        .await
    }
}
