//! Reporting back to the workflow.
//!
//! [`WorkflowHost`] is the publish side of the run: debug traces, the step
//! output and the failure signal. [`GitHubWorkflow`] speaks the Actions
//! runner protocol.

mod command;
mod error;

pub use error::OutputError;

use command::{format_command, format_file_entry};
use std::fs::OpenOptions;
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Publishes diagnostics, outputs and failures to the calling workflow.
pub trait WorkflowHost {
    /// Records a debug trace.
    fn debug(&mut self, message: &str);

    /// Publishes a named step output.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError`] if the output could not be published.
    fn set_output(&mut self, name: &str, value: &str) -> Result<(), OutputError>;

    /// Marks the step as failed with `message`.
    fn set_failed(&mut self, message: &str);
}

/// Workflow host for the GitHub Actions runner.
///
/// Commands are written to `out` (stdout by default). Outputs go to the
/// `GITHUB_OUTPUT` file when one is configured, and to the legacy
/// `set-output` command otherwise.
#[derive(Debug)]
pub struct GitHubWorkflow<W = Stdout> {
    out: W,
    output_file: Option<PathBuf>,
    failed: bool,
}

impl GitHubWorkflow {
    /// Creates a host writing commands to stdout.
    #[must_use]
    pub fn new(output_file: Option<PathBuf>) -> Self {
        Self::with_writer(io::stdout(), output_file)
    }
}

impl<W: Write> GitHubWorkflow<W> {
    /// Creates a host writing commands to `out`.
    pub fn with_writer(out: W, output_file: Option<PathBuf>) -> Self {
        Self {
            out,
            output_file,
            failed: false,
        }
    }

    /// Returns true once [`set_failed`](WorkflowHost::set_failed) was called.
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Consumes the host, returning the command writer.
    pub fn into_writer(self) -> W {
        self.out
    }

    fn issue(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}") {
            warn!(error = %e, "Failed to write workflow command");
        }
    }

    fn append_to_output_file(path: &Path, entry: &str) -> Result<(), OutputError> {
        let io_error = |source| OutputError::Io {
            path: path.display().to_string(),
            source,
        };

        // The runner creates the file; a missing file means a broken setup.
        let mut file = OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(io_error)?;
        file.write_all(entry.as_bytes()).map_err(io_error)
    }
}

impl<W: Write> WorkflowHost for GitHubWorkflow<W> {
    fn debug(&mut self, message: &str) {
        let line = format_command("debug", &[], message);
        self.issue(&line);
    }

    fn set_output(&mut self, name: &str, value: &str) -> Result<(), OutputError> {
        match &self.output_file {
            Some(path) => {
                let entry = format_file_entry(name, value)?;
                Self::append_to_output_file(path, &entry)
            }
            None => {
                let line = format_command("set-output", &[("name", name)], value);
                self.issue("");
                self.issue(&line);
                Ok(())
            }
        }
    }

    fn set_failed(&mut self, message: &str) {
        self.failed = true;
        let line = format_command("error", &[], message);
        self.issue(&line);
    }
}
