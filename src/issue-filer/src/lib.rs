#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod assignees;
pub mod context;
pub mod inputs;
pub mod issues;
pub mod runner;
pub mod workflow;

pub use assignees::Assignees;
pub use context::{parse_api_url, ContextError, RepoContext};
pub use inputs::{env_var_name, get_input, EnvInputs, InputError, InputOptions, InputSource};
pub use issues::{GitHubTracker, IssueRequest, IssueTracker, SubmissionError, DEFAULT_API_URL};
pub use runner::{IssueFiler, ResolvedInputs, RunError, RunOutcome, ISSUE_OUTPUT};
pub use workflow::{GitHubWorkflow, OutputError, WorkflowHost};
