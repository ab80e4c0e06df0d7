//! Issue submission error types.

use std::error::Error as _;
use thiserror::Error;

/// Errors that can occur while filing an issue.
///
/// The display text is the underlying failure's own message; it is what the
/// workflow sees as the failure reason.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Client construction or transport failure.
    #[error("{message}")]
    Client {
        /// One-line description of the failure.
        message: String,
        #[source]
        source: octocrab::Error,
    },

    /// The API rejected the request (bad credentials, validation failure, ...).
    #[error("{message}")]
    Rejected {
        /// HTTP status code of the rejection.
        status: u16,
        /// API message, with the documentation link when one was given.
        message: String,
    },
}

impl From<octocrab::Error> for SubmissionError {
    fn from(error: octocrab::Error) -> Self {
        match error {
            octocrab::Error::GitHub { source, .. } => {
                let message = match &source.documentation_url {
                    Some(url) => format!("{} - {url}", source.message),
                    None => source.message.clone(),
                };
                Self::Rejected {
                    status: source.status_code.as_u16(),
                    message,
                }
            }
            other => Self::Client {
                message: client_message(&other),
                source: other,
            },
        }
    }
}

/// Describes a client error without the backtrace octocrab appends to its
/// own display text.
fn client_message(error: &octocrab::Error) -> String {
    let message = match error.source() {
        Some(source) => source.to_string(),
        None => error.to_string(),
    };
    message.lines().next().unwrap_or_default().trim().to_string()
}

