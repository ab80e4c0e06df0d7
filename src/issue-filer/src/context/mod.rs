//! Target repository context.
//!
//! The repository an issue is filed in is chosen by the workflow that runs
//! the step, not by the step's inputs. It is resolved once by the caller and
//! handed explicitly to the submission step.

mod error;

pub use error::ContextError;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Parses the base URL of the API, as found in `GITHUB_API_URL`.
///
/// # Errors
///
/// Returns [`ContextError::InvalidApiUrl`] if `value` is not an absolute URL.
pub fn parse_api_url(value: &str) -> Result<Url, ContextError> {
    let value = value.trim();
    Url::parse(value).map_err(|source| ContextError::InvalidApiUrl {
        value: value.to_string(),
        source,
    })
}

/// Owner and name of the repository to file issues in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoContext {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub repo: String,
}

impl RepoContext {
    /// Creates a context from its parts.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Resolves the context from an optional `owner/repo` value, as found in
    /// `GITHUB_REPOSITORY`.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::Missing`] for an absent or empty value and
    /// [`ContextError::Malformed`] for anything other than `owner/repo`.
    pub fn resolve(value: Option<&str>) -> Result<Self, ContextError> {
        match value.map(str::trim) {
            None | Some("") => Err(ContextError::Missing),
            Some(value) => value.parse(),
        }
    }
}

impl FromStr for RepoContext {
    type Err = ContextError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let malformed = || ContextError::Malformed {
            value: value.to_string(),
        };

        let (owner, repo) = value.split_once('/').ok_or_else(malformed)?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(malformed());
        }

        Ok(Self::new(owner, repo))
    }
}

impl fmt::Display for RepoContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
