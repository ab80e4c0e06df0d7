//! CLI for the Issue Filer action.
//!
//! Reads the step inputs from `INPUT_*` variables, files one issue in the
//! workflow's repository and publishes it as the `issue` output.

use clap::Parser;
use issue_filer::{
    parse_api_url, ContextError, EnvInputs, GitHubTracker, GitHubWorkflow, IssueFiler,
    RepoContext, RunOutcome, WorkflowHost, DEFAULT_API_URL,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use url::Url;

/// Issue Filer - Create an issue in the current repository.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Repository to file the issue in, as `owner/repo`.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: Option<String>,

    /// Base URL of the GitHub REST API.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// File the runner reads step outputs from.
    #[arg(long, env = "GITHUB_OUTPUT")]
    output_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Explicitly install aws-lc-rs; fails only if a provider is already set.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    init_tracing();

    let args = Args::parse();
    let output_file = args.output_file.clone().filter(|p| !p.as_os_str().is_empty());
    let mut host = GitHubWorkflow::new(output_file);

    let (repository, api_url) = match resolve_context(&args) {
        Ok(context) => context,
        Err(e) => {
            error!(error = %e, "Cannot resolve run context");
            host.set_failed(&e.to_string());
            return ExitCode::FAILURE;
        }
    };

    info!(repo = %repository, api = %api_url, "Starting run");
    let filer = IssueFiler::new(GitHubTracker::new(api_url), repository);

    match filer.run(&EnvInputs, &mut host).await {
        RunOutcome::Reported(_) => ExitCode::SUCCESS,
        RunOutcome::Failed(_) => ExitCode::FAILURE,
    }
}

/// Resolves the target repository and API base URL.
fn resolve_context(args: &Args) -> Result<(RepoContext, Url), ContextError> {
    let repository = RepoContext::resolve(args.repository.as_deref())?;
    let api_url = parse_api_url(&args.api_url)?;
    Ok((repository, api_url))
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output) on stderr, since stdout
///   carries workflow commands
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
