//! Start and stop actions against the managed container.
//!
//! Each action runs exactly one Docker command (start additionally re-checks
//! existence first to choose between creating and resuming) and reports the
//! attempt as an [`ActionOutcome`] for the caller to display. No retry is
//! made; the caller is expected to re-poll the container state afterwards.

use log::warn;

use crate::docker::{container_exists, CommandRunner, ContainerRef, DOCKER_PROGRAM};
use crate::error::Error;

/// Result of a single command attempt, consumed by the display update and
/// then discarded.
#[derive(Debug, Clone)]
pub struct ActionOutcome {
    pub succeeded: bool,
    pub message: String,
    pub stdout: String,
    pub stderr: String,
    /// Service URL worth surfacing as a link, present on successful starts.
    pub url: Option<String>,
}

impl ActionOutcome {
    fn success(message: String, stdout: String, url: Option<String>) -> Self {
        Self {
            succeeded: true,
            message,
            stdout,
            stderr: String::new(),
            url,
        }
    }

    fn failure(message: String, stdout: String, stderr: String) -> Self {
        Self {
            succeeded: false,
            message,
            stdout,
            stderr,
            url: None,
        }
    }

    /// The lines the display log should show for this outcome: the headline
    /// message, then any captured output worth surfacing.
    pub fn log_lines(&self) -> Vec<String> {
        let mut lines = vec![self.message.clone()];

        if self.succeeded {
            if !self.stdout.trim().is_empty() {
                lines.push(self.stdout.trim_end().to_string());
            }
        } else {
            if !self.stderr.trim().is_empty() {
                lines.push(format!("Error (stderr): {}", self.stderr.trim_end()));
            }
            if !self.stdout.trim().is_empty() {
                lines.push(format!("Error (stdout): {}", self.stdout.trim_end()));
            }
        }

        lines
    }
}

fn failure_from_error(context: &str, error: Error) -> ActionOutcome {
    match error {
        // Exit-code failures carry their streams verbatim under the context
        // headline; everything else (tool missing, spawn failure) is its own
        // message.
        Error::CommandFailed { stdout, stderr } => {
            ActionOutcome::failure(context.to_string(), stdout, stderr)
        }
        other => ActionOutcome::failure(other.to_string(), String::new(), String::new()),
    }
}

/// Starts the managed container.
///
/// Re-runs the existence query first: an existing container is resumed with
/// `docker start`, an absent one is created with `docker run`. Exactly one
/// of the two commands is issued per call. A failure of the existence check
/// itself aborts the action without issuing either.
pub fn start_container(runner: &impl CommandRunner, container: &ContainerRef) -> ActionOutcome {
    let exists = match container_exists(runner, container) {
        Ok(exists) => exists,
        Err(e) => {
            warn!("Existence check for `{}` failed: {e}", container.name);
            return failure_from_error("Error checking for an existing container.", e);
        }
    };

    if exists {
        match runner.run(DOCKER_PROGRAM, &container.resume_args()) {
            Ok(output) => ActionOutcome::success(
                format!(
                    "Stirling PDF container started successfully (or was already running). Access at {}",
                    container.url()
                ),
                output.stdout,
                Some(container.url()),
            ),
            Err(e) => failure_from_error("Failed to start the existing Stirling PDF container.", e),
        }
    } else {
        match runner.run(DOCKER_PROGRAM, &container.create_args()) {
            Ok(output) => ActionOutcome::success(
                format!(
                    "Stirling PDF container created and started successfully. Access at {}",
                    container.url()
                ),
                output.stdout,
                Some(container.url()),
            ),
            Err(e) => failure_from_error("Failed to run a new Stirling PDF container.", e),
        }
    }
}

/// Stops the managed container unconditionally, with no existence pre-check.
pub fn stop_container(runner: &impl CommandRunner, container: &ContainerRef) -> ActionOutcome {
    match runner.run(DOCKER_PROGRAM, &container.stop_args()) {
        Ok(output) => ActionOutcome::success(
            "Stirling PDF container stopped successfully.".to_string(),
            output.stdout,
            None,
        ),
        Err(e) => failure_from_error("Failed to stop the Stirling PDF container.", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docker::CommandOutput;
    use crate::error::Result;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    enum Reply {
        Stdout(&'static str),
        Fail {
            stdout: &'static str,
            stderr: &'static str,
        },
        NotFound,
    }

    struct RecordingRunner {
        replies: RefCell<VecDeque<Reply>>,
        calls: RefCell<Vec<Vec<String>>>,
    }

    impl RecordingRunner {
        fn new(replies: Vec<Reply>) -> Self {
            Self {
                replies: RefCell::new(replies.into()),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Vec<String>> {
            self.calls.borrow().clone()
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
            let mut call = vec![program.to_string()];
            call.extend(args.iter().cloned());
            self.calls.borrow_mut().push(call);

            match self
                .replies
                .borrow_mut()
                .pop_front()
                .expect("unexpected command invocation")
            {
                Reply::Stdout(stdout) => Ok(CommandOutput {
                    stdout: stdout.to_string(),
                    stderr: String::new(),
                }),
                Reply::Fail { stdout, stderr } => Err(Error::CommandFailed {
                    stdout: stdout.to_string(),
                    stderr: stderr.to_string(),
                }),
                Reply::NotFound => Err(Error::tool_not_found(program)),
            }
        }
    }

    fn test_container() -> ContainerRef {
        ContainerRef {
            name: "stirling-pdf".to_string(),
            image: "stirlingtools/stirling-pdf:latest".to_string(),
            port: 8080,
            data_directory: "./stirling-data".to_string(),
        }
    }

    #[test]
    fn start_creates_when_no_container_exists() {
        let runner = RecordingRunner::new(vec![Reply::Stdout(""), Reply::Stdout("abc123\n")]);
        let outcome = start_container(&runner, &test_container());

        assert!(outcome.succeeded);
        assert_eq!(outcome.url.as_deref(), Some("http://localhost:8080"));

        let calls = runner.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0][1], "ps");
        assert_eq!(
            calls[1],
            vec![
                "docker",
                "run",
                "-d",
                "--name",
                "stirling-pdf",
                "-p",
                "8080:8080",
                "-v",
                "./stirling-data:/configs",
                "stirlingtools/stirling-pdf:latest"
            ]
        );
    }

    #[test]
    fn start_resumes_when_container_exists() {
        let runner = RecordingRunner::new(vec![Reply::Stdout("abc123\n"), Reply::Stdout("")]);
        let outcome = start_container(&runner, &test_container());

        assert!(outcome.succeeded);
        assert!(outcome.message.contains("http://localhost:8080"));

        let calls = runner.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1], vec!["docker", "start", "stirling-pdf"]);
    }

    #[test]
    fn start_issues_no_command_when_existence_check_fails() {
        let runner = RecordingRunner::new(vec![Reply::Fail {
            stdout: "",
            stderr: "daemon not running",
        }]);
        let outcome = start_container(&runner, &test_container());

        assert!(!outcome.succeeded);
        assert_eq!(outcome.stderr, "daemon not running");
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn start_reports_tool_not_found() {
        let runner = RecordingRunner::new(vec![Reply::NotFound]);
        let outcome = start_container(&runner, &test_container());

        assert!(!outcome.succeeded);
        assert!(outcome.message.contains("not found"));
    }

    #[test]
    fn failed_resume_carries_both_streams() {
        let runner = RecordingRunner::new(vec![
            Reply::Stdout("abc123\n"),
            Reply::Fail {
                stdout: "partial",
                stderr: "port already allocated",
            },
        ]);
        let outcome = start_container(&runner, &test_container());

        assert!(!outcome.succeeded);
        assert!(outcome.url.is_none());
        assert_eq!(outcome.stdout, "partial");
        assert_eq!(outcome.stderr, "port already allocated");

        let lines = outcome.log_lines();
        assert!(lines[1].contains("port already allocated"));
        assert!(lines[2].contains("partial"));
    }

    #[test]
    fn stop_dispatches_without_precondition_check() {
        let runner = RecordingRunner::new(vec![Reply::Stdout("stirling-pdf\n")]);
        let outcome = stop_container(&runner, &test_container());

        assert!(outcome.succeeded);
        assert!(outcome.url.is_none());
        assert_eq!(runner.calls(), vec![vec!["docker", "stop", "stirling-pdf"]]);
    }

    #[test]
    fn stop_failure_is_logged_not_retried() {
        let runner = RecordingRunner::new(vec![Reply::Fail {
            stdout: "",
            stderr: "No such container: stirling-pdf",
        }]);
        let outcome = stop_container(&runner, &test_container());

        assert!(!outcome.succeeded);
        assert_eq!(runner.calls().len(), 1);
        assert!(outcome
            .log_lines()
            .iter()
            .any(|line| line.contains("No such container")));
    }

    #[test]
    fn success_log_lines_skip_empty_stdout() {
        let outcome = ActionOutcome::success("done".to_string(), "  \n".to_string(), None);
        assert_eq!(outcome.log_lines(), vec!["done".to_string()]);
    }
}
