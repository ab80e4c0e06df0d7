//! Input resolution error types.

use thiserror::Error;

/// Errors that can occur while reading action inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// A required input was absent or empty.
    #[error("Input required and not supplied: {name}")]
    MissingRequired { name: String },
}
