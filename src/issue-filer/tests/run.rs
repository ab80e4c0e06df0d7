use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use issue_filer::{
    Assignees, IssueFiler, IssueRequest, IssueTracker, OutputError, RepoContext, RunOutcome,
    SubmissionError, WorkflowHost,
};
use serde_json::{json, Value};

/// A create-issue call seen by [`FakeTracker`].
#[derive(Debug, Clone)]
struct Submission {
    token: String,
    repository: RepoContext,
    request: IssueRequest,
}

/// Tracker that hands out increasing issue numbers.
#[derive(Default)]
struct FakeTracker {
    submissions: Mutex<Vec<Submission>>,
    next_number: AtomicU64,
    rejection: Option<String>,
}

impl FakeTracker {
    fn rejecting(message: &str) -> Self {
        Self {
            rejection: Some(message.to_string()),
            ..Default::default()
        }
    }

    fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().unwrap().clone()
    }
}

impl IssueTracker for FakeTracker {
    async fn create_issue(
        &self,
        token: &str,
        repository: &RepoContext,
        request: &IssueRequest,
    ) -> Result<Value, SubmissionError> {
        self.submissions.lock().unwrap().push(Submission {
            token: token.to_string(),
            repository: repository.clone(),
            request: request.clone(),
        });

        if let Some(message) = &self.rejection {
            return Err(SubmissionError::Rejected {
                status: 401,
                message: message.clone(),
            });
        }

        let number = self.next_number.fetch_add(1, Ordering::SeqCst) + 1;
        let assignees: Vec<Value> = request
            .assignees
            .handles()
            .unwrap_or_default()
            .iter()
            .map(|login| json!({ "login": login }))
            .collect();

        Ok(json!({
            "id": 1_000 + number,
            "number": number,
            "html_url": format!("https://github.com/{repository}/issues/{number}"),
            "title": request.title,
            "body": request.body,
            "assignees": assignees,
            "labels": [],
            "state": "open"
        }))
    }
}

/// Host that records everything published to it.
#[derive(Default)]
struct RecordingHost {
    traces: Vec<String>,
    outputs: Vec<(String, String)>,
    failures: Vec<String>,
    reject_outputs: bool,
}

impl WorkflowHost for RecordingHost {
    fn debug(&mut self, message: &str) {
        self.traces.push(message.to_string());
    }

    fn set_output(&mut self, name: &str, value: &str) -> Result<(), OutputError> {
        if self.reject_outputs {
            return Err(OutputError::Io {
                path: "github_output".to_string(),
                source: io::Error::other("disk full"),
            });
        }
        self.outputs.push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn set_failed(&mut self, message: &str) {
        self.failures.push(message.to_string());
    }
}

fn inputs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn filer(tracker: FakeTracker) -> IssueFiler<FakeTracker> {
    IssueFiler::new(tracker, RepoContext::new("octo-org", "hello-world"))
}

async fn run_with(
    filer: &IssueFiler<FakeTracker>,
    pairs: &[(&str, &str)],
) -> (RunOutcome, RecordingHost) {
    let mut host = RecordingHost::default();
    let outcome = filer.run(&inputs(pairs), &mut host).await;
    (outcome, host)
}

#[tokio::test]
async fn fails_if_no_token_is_provided() {
    let filer = filer(FakeTracker::default());
    let (outcome, host) = run_with(&filer, &[("title", "Check this out")]).await;

    let message = "Input required and not supplied: token";
    assert_eq!(outcome, RunOutcome::Failed(message.to_string()));
    assert_eq!(host.failures, [message]);
    assert!(host.traces.is_empty());
    assert!(host.outputs.is_empty());
    assert!(filer_submissions(&filer).is_empty());
}

#[tokio::test]
async fn fails_if_no_title_is_provided() {
    let filer = filer(FakeTracker::default());
    let (outcome, host) = run_with(&filer, &[("token", "t"), ("body", "unused")]).await;

    let message = "Input required and not supplied: title";
    assert_eq!(outcome, RunOutcome::Failed(message.to_string()));
    assert_eq!(host.failures, [message]);
    assert!(host.traces.is_empty());
    assert!(host.outputs.is_empty());
    assert!(filer_submissions(&filer).is_empty());
}

#[tokio::test]
async fn accepts_a_title() {
    let filer = filer(FakeTracker::default());
    let (_, host) = run_with(&filer, &[("token", "t"), ("title", "Check this out")]).await;

    assert_eq!(host.traces[0], "Title: Check this out");
}

#[tokio::test]
async fn accepts_a_body() {
    let filer = filer(FakeTracker::default());
    let (_, host) = run_with(
        &filer,
        &[("token", "t"), ("title", "T"), ("body", "This would cool...!")],
    )
    .await;

    assert_eq!(host.traces[1], "Body: This would cool...!");
}

#[tokio::test]
async fn accepts_an_empty_body() {
    let filer = filer(FakeTracker::default());
    let (_, host) = run_with(&filer, &[("token", "t"), ("title", "T")]).await;

    assert_eq!(host.traces[1], "Body: ");
}

#[tokio::test]
async fn accepts_zero_assignees() {
    let filer = filer(FakeTracker::default());
    let (_, host) = run_with(&filer, &[("token", "t"), ("title", "T"), ("assignees", "")]).await;

    assert_eq!(host.traces[2], "@: undefined");
    assert!(filer_submissions(&filer)[0].request.assignees.is_absent());
}

#[tokio::test]
async fn accepts_one_assignee() {
    let filer = filer(FakeTracker::default());
    let (_, host) = run_with(
        &filer,
        &[("token", "t"), ("title", "T"), ("assignees", "alice")],
    )
    .await;

    assert_eq!(host.traces[2], r#"@: ["alice"]"#);
}

#[tokio::test]
async fn accepts_a_couple_of_assignees() {
    let filer = filer(FakeTracker::default());
    let (_, host) = run_with(
        &filer,
        &[("token", "t"), ("title", "T"), ("assignees", "alice\nbob")],
    )
    .await;

    assert_eq!(host.traces[2], r#"@: ["alice","bob"]"#);
    assert_eq!(
        filer_submissions(&filer)[0].request.assignees,
        Assignees::from(vec!["alice".to_string(), "bob".to_string()])
    );
}

#[tokio::test]
async fn files_catchy_title_scenario() {
    let filer = filer(FakeTracker::default());
    let (outcome, host) = run_with(
        &filer,
        &[
            ("token", "t"),
            ("title", "Catchy title"),
            ("body", "Great body"),
            ("assignees", ""),
        ],
    )
    .await;

    assert_eq!(
        host.traces,
        ["Title: Catchy title", "Body: Great body", "@: undefined"]
    );

    let submissions = filer_submissions(&filer);
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].token, "t");
    assert_eq!(
        submissions[0].repository,
        RepoContext::new("octo-org", "hello-world")
    );
    assert_eq!(
        submissions[0].request,
        IssueRequest {
            title: "Catchy title".to_string(),
            body: "Great body".to_string(),
            assignees: Assignees::absent(),
        }
    );

    assert!(outcome.is_success());
    assert!(host.failures.is_empty());
}

#[tokio::test]
async fn publishes_remote_payload_unchanged() {
    let filer = filer(FakeTracker::default());
    let (outcome, host) = run_with(
        &filer,
        &[("token", "t"), ("title", "T"), ("assignees", "alice")],
    )
    .await;

    let RunOutcome::Reported(issue) = outcome else {
        panic!("expected a reported issue");
    };
    assert_eq!(host.outputs.len(), 1);
    assert_eq!(host.outputs[0].0, "issue");

    let published: Value = serde_json::from_str(&host.outputs[0].1).unwrap();
    assert_eq!(published, issue);
    assert_eq!(published["assignees"], json!([{ "login": "alice" }]));
    assert_eq!(published["state"], "open");
}

#[tokio::test]
async fn identical_runs_create_distinct_issues() {
    let filer = filer(FakeTracker::default());
    let pairs = [("token", "t"), ("title", "Same"), ("body", "Same")];

    let (first, _) = run_with(&filer, &pairs).await;
    let (second, _) = run_with(&filer, &pairs).await;

    let (RunOutcome::Reported(first), RunOutcome::Reported(second)) = (first, second) else {
        panic!("expected both runs to succeed");
    };
    assert_ne!(first["id"], second["id"]);
    assert_ne!(first["number"], second["number"]);
    assert_eq!(filer_submissions(&filer).len(), 2);
}

#[tokio::test]
async fn submission_failure_is_reported_once() {
    let filer = filer(FakeTracker::rejecting(
        "Bad credentials - https://docs.github.com/rest",
    ));
    let (outcome, host) = run_with(&filer, &[("token", "expired"), ("title", "T")]).await;

    let message = "Bad credentials - https://docs.github.com/rest";
    assert_eq!(outcome, RunOutcome::Failed(message.to_string()));
    assert_eq!(host.failures, [message]);
    assert_eq!(host.traces.len(), 3);
    assert!(host.outputs.is_empty());
}

#[tokio::test]
async fn output_failure_fails_the_run() {
    let filer = filer(FakeTracker::default());
    let mut host = RecordingHost {
        reject_outputs: true,
        ..Default::default()
    };

    let outcome = filer
        .run(&inputs(&[("token", "t"), ("title", "T")]), &mut host)
        .await;

    let message = "Unable to write output file 'github_output': disk full";
    assert_eq!(outcome, RunOutcome::Failed(message.to_string()));
    assert_eq!(host.failures, [message]);
    assert!(host.outputs.is_empty());
}

fn filer_submissions(filer: &IssueFiler<FakeTracker>) -> Vec<Submission> {
    filer.tracker().submissions()
}
