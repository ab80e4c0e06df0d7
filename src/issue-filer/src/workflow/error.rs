//! Output publication error types.

use thiserror::Error;

/// Errors that can occur while publishing a step output.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to write the output file.
    #[error("Unable to write output file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The output name contains the generated delimiter.
    #[error("Unexpected input: name should not contain the delimiter \"{delimiter}\"")]
    DelimiterInName { delimiter: String },

    /// The output value contains the generated delimiter.
    #[error("Unexpected input: value should not contain the delimiter \"{delimiter}\"")]
    DelimiterInValue { delimiter: String },

    /// Failed to serialize the output value.
    #[error("Unable to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}
