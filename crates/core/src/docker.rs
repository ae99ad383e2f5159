//! Docker CLI invocation layer.
//!
//! This module defines the managed container reference, the argument vectors
//! for every Docker command the application issues, and the [`CommandRunner`]
//! seam through which those commands are executed and captured.

use std::process::Command;

use log::info;

use crate::error::{Error, Result};

/// The container engine binary, resolved through `PATH`.
pub const DOCKER_PROGRAM: &str = "docker";

/// Port the Stirling PDF image listens on inside the container.
const CONTAINER_PORT: u16 = 8080;
/// Mount target the image reads its configuration from.
const CONFIG_MOUNT_TARGET: &str = "/configs";

/// The single managed container: name, image and launch parameters.
///
/// Built once at startup from [`crate::config::AppConfig`] and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRef {
    pub name: String,
    pub image: String,
    pub port: u16,
    pub data_directory: String,
}

impl ContainerRef {
    /// The URL the containerized service is reachable at once running.
    pub fn url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    /// Existence query: list containers (running or not) filtered by exact
    /// name, emitting only IDs. Empty output means the container has never
    /// been created.
    pub fn list_args(&self) -> Vec<String> {
        vec![
            "ps".to_string(),
            "-a".to_string(),
            "--filter".to_string(),
            format!("name={}", self.name),
            "--format".to_string(),
            "{{.ID}}".to_string(),
        ]
    }

    /// Running query: inspect the named container for its running flag.
    pub fn inspect_args(&self) -> Vec<String> {
        vec![
            "inspect".to_string(),
            "--format".to_string(),
            "{{.State.Running}}".to_string(),
            self.name.clone(),
        ]
    }

    /// Resume a previously created, currently stopped container.
    pub fn resume_args(&self) -> Vec<String> {
        vec!["start".to_string(), self.name.clone()]
    }

    /// Create and launch a new detached container with the published port
    /// and the data-directory bind mount.
    pub fn create_args(&self) -> Vec<String> {
        vec![
            "run".to_string(),
            "-d".to_string(),
            "--name".to_string(),
            self.name.clone(),
            "-p".to_string(),
            format!("{}:{}", self.port, CONTAINER_PORT),
            "-v".to_string(),
            format!("{}:{}", self.data_directory, CONFIG_MOUNT_TARGET),
            self.image.clone(),
        ]
    }

    /// Stop the named container.
    pub fn stop_args(&self) -> Vec<String> {
        vec!["stop".to_string(), self.name.clone()]
    }
}

/// Captured output streams of a completed command.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs a command and captures its output.
///
/// The application goes through this seam for every external invocation so
/// that the polling and action logic can be exercised against a scripted
/// runner in tests.
pub trait CommandRunner {
    /// Runs `program` with `args`, capturing both output streams.
    ///
    /// # Errors
    ///
    /// Returns an error if the program is not on `PATH`, cannot be spawned,
    /// or exits with a non-success code.
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput>;
}

/// [`CommandRunner`] over `std::process`, blocking until the command exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        info!("Executing: {} {}", program, args.join(" "));

        let output = Command::new(program).args(args).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::tool_not_found(program)
            } else {
                Error::Spawn {
                    program: program.to_string(),
                    original: e,
                }
            }
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if output.status.success() {
            Ok(CommandOutput { stdout, stderr })
        } else {
            Err(Error::CommandFailed { stdout, stderr })
        }
    }
}

/// Returns whether a container with the managed name has ever been created,
/// regardless of whether it is currently running.
///
/// # Errors
///
/// Returns an error if the existence query itself fails.
pub fn container_exists(runner: &impl CommandRunner, container: &ContainerRef) -> Result<bool> {
    let output = runner.run(DOCKER_PROGRAM, &container.list_args())?;
    Ok(!output.stdout.trim().is_empty())
}

/// Returns whether the named container is currently executing.
///
/// Any successful inspect output other than `true` counts as not running.
///
/// # Errors
///
/// Returns an error if the running query itself fails.
pub fn container_running(runner: &impl CommandRunner, container: &ContainerRef) -> Result<bool> {
    let output = runner.run(DOCKER_PROGRAM, &container.inspect_args())?;
    Ok(output.stdout.trim() == "true")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_container() -> ContainerRef {
        ContainerRef {
            name: "stirling-pdf".to_string(),
            image: "stirlingtools/stirling-pdf:latest".to_string(),
            port: 8080,
            data_directory: "./stirling-data".to_string(),
        }
    }

    #[test]
    fn test_url_uses_published_port() {
        assert_eq!(test_container().url(), "http://localhost:8080");

        let mut container = test_container();
        container.port = 9090;
        assert_eq!(container.url(), "http://localhost:9090");
    }

    #[test]
    fn test_list_args_filter_by_exact_name() {
        assert_eq!(
            test_container().list_args(),
            vec![
                "ps",
                "-a",
                "--filter",
                "name=stirling-pdf",
                "--format",
                "{{.ID}}"
            ]
        );
    }

    #[test]
    fn test_inspect_args_emit_running_flag() {
        assert_eq!(
            test_container().inspect_args(),
            vec!["inspect", "--format", "{{.State.Running}}", "stirling-pdf"]
        );
    }

    #[test]
    fn test_resume_and_stop_args_name_the_container() {
        assert_eq!(test_container().resume_args(), vec!["start", "stirling-pdf"]);
        assert_eq!(test_container().stop_args(), vec!["stop", "stirling-pdf"]);
    }

    #[test]
    fn test_create_args_carry_port_mount_and_image() {
        assert_eq!(
            test_container().create_args(),
            vec![
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
    fn test_system_runner_captures_stdout() {
        let output = SystemRunner
            .run("echo", &["hello".to_string()])
            .expect("echo should succeed");
        assert_eq!(output.stdout.trim(), "hello");
    }

    #[test]
    fn test_system_runner_nonzero_exit_is_command_failed() {
        let result = SystemRunner.run(
            "sh",
            &["-c".to_string(), "echo boom >&2; exit 3".to_string()],
        );
        match result {
            Err(Error::CommandFailed { stderr, .. }) => assert_eq!(stderr.trim(), "boom"),
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_system_runner_missing_binary_is_tool_not_found() {
        let result = SystemRunner.run("definitely-not-a-real-binary-ab12", &[]);
        assert!(matches!(result, Err(Error::ToolNotFound { .. })));
    }
}
