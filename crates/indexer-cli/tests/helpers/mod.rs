use assert_cmd::Command;
use tempfile::TempDir;

/// Test harness for running the CLI against a configurable endpoint.
///
/// Commands run in a scratch directory so a developer's own `indexer.toml`
/// never leaks into a test.
pub struct CliTestHarness {
    temp_dir: TempDir,
    api: String,
}

impl CliTestHarness {
    /// Harness pointed at a local port nothing listens on.
    pub fn new() -> Self {
        Self::with_api("http://127.0.0.1:9")
    }

    pub fn with_api(api: &str) -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");

        Self {
            temp_dir,
            api: api.to_string(),
        }
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("graph-indexer").expect("Failed to find graph-indexer binary");

        cmd.current_dir(self.temp_dir.path());
        cmd.env("INDEXER_API", &self.api);

        cmd
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    /// Predicate for the invalid output format error
    pub fn invalid_output_format() -> impl Predicate<str> {
        predicate::str::contains("Invalid output format")
    }

    /// Predicate for the missing action id error
    pub fn missing_action_id() -> impl Predicate<str> {
        predicate::str::contains("Missing required argument: 'actionID'")
    }

    /// Predicate for the usage block shown after validation failures
    pub fn has_usage() -> impl Predicate<str> {
        predicate::str::contains("Usage: graph-indexer actions cancel")
    }

    /// Predicate for the validation-phase spinner failure line
    pub fn input_phase_failed() -> impl Predicate<str> {
        predicate::str::contains("Failed to process input parameters")
    }

    /// Predicate for the execution-phase spinner failure line
    pub fn action_phase_failed() -> impl Predicate<str> {
        predicate::str::contains("Failed to cancel actions")
    }
}
