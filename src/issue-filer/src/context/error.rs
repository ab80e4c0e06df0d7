//! Repository context error types.

use thiserror::Error;

/// Errors that can occur while resolving the target repository.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    /// The host did not name a repository.
    #[error("Repository context not supplied: set GITHUB_REPOSITORY to 'owner/repo'")]
    Missing,

    /// The repository name is not in `owner/repo` form.
    #[error("Malformed repository '{value}': expected 'owner/repo'")]
    Malformed { value: String },

    /// The API base URL could not be parsed.
    #[error("Invalid API URL '{value}': {source}")]
    InvalidApiUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}
