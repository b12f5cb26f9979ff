//! # External Command Runner
//!
//! Runs one external tool and turns its outcome into a [`ToolInvocation`].
//!
//! [`CommandRunner`] is the seam the orchestrators call through:
//! - [`ProcessRunner`] spawns real child processes
//! - `MockRunner` (tests only) records calls and replays preset results
//!
//! [`run_command`] wraps a runner with the user-facing contract: announce,
//! run, report, echo output. A tool that cannot even be launched is reported
//! like any other failure and never surfaces as an error.

mod process;

#[cfg(test)]
mod mock;

use std::io;

use crate::cli::{Output, Tone};

pub use process::ProcessRunner;

#[cfg(test)]
pub use mock::MockRunner;

/// Output of a finished child process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    /// Exit code, `-1` when the process was killed by a signal
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    /// Output of a process that printed nothing
    pub fn empty(code: i32) -> Self {
        Self {
            code,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Executes external commands given as argv vectors
pub trait CommandRunner {
    /// Runs to completion with stdout and stderr captured.
    fn capture(&self, argv: &[String]) -> io::Result<CapturedOutput>;

    /// Runs to completion with the terminal's stdio and returns the exit code.
    fn stream(&self, argv: &[String]) -> io::Result<i32>;
}

/// Outcome of one labelled tool run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub label: String,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
    /// Set when the process could not be launched
    pub launch_error: Option<String>,
}

/// Runs `argv`, reporting progress and output under `label`
pub fn run_command(
    runner: &dyn CommandRunner,
    output: &Output,
    argv: &[String],
    label: &str,
) -> ToolInvocation {
    output.info(&format!("🔧 {}...", label));

    match runner.capture(argv) {
        Ok(captured) if captured.success() => {
            output.success(&format!("✅ {} completed successfully", label));
            output.echo(&captured.stdout, Tone::Plain);
            ToolInvocation {
                label: label.to_string(),
                success: true,
                stdout: captured.stdout,
                stderr: captured.stderr,
                launch_error: None,
            }
        }
        Ok(captured) => {
            tracing::debug!(label, code = captured.code, "tool failed");
            output.error(&format!("❌ {} failed", label));
            output.echo(&captured.stdout, Tone::Failure);
            output.echo(&captured.stderr, Tone::Failure);
            ToolInvocation {
                label: label.to_string(),
                success: false,
                stdout: captured.stdout,
                stderr: captured.stderr,
                launch_error: None,
            }
        }
        Err(e) => {
            tracing::debug!(label, error = %e, "tool could not be launched");
            output.error(&format!("❌ Error running {}: {}", label, e));
            ToolInvocation {
                label: label.to_string(),
                success: false,
                stdout: String::new(),
                stderr: String::new(),
                launch_error: Some(e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Line;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn success_echoes_stdout() {
        let runner = MockRunner::with_responses(vec![Ok(CapturedOutput {
            code: 0,
            stdout: "Success output".to_string(),
            stderr: String::new(),
        })]);
        let output = Output::capture();

        let result = run_command(&runner, &output, &argv(&["echo", "test"]), "Test command");

        assert!(result.success);
        assert_eq!(result.stdout, "Success output");
        assert_eq!(
            output.lines(),
            vec![
                Line { tone: Tone::Info, text: "🔧 Test command...".to_string() },
                Line {
                    tone: Tone::Success,
                    text: "✅ Test command completed successfully".to_string()
                },
                Line { tone: Tone::Plain, text: "Success output".to_string() },
            ]
        );
    }

    #[test]
    fn success_with_empty_stdout_prints_blank_line() {
        let runner = MockRunner::with_codes(&[0]);
        let output = Output::capture();

        let result = run_command(&runner, &output, &argv(&["echo"]), "Test command");

        assert!(result.success);
        assert_eq!(
            output.lines().last(),
            Some(&Line { tone: Tone::Plain, text: String::new() })
        );
    }

    #[test]
    fn failure_echoes_stdout_then_stderr() {
        let runner = MockRunner::with_responses(vec![Ok(CapturedOutput {
            code: 1,
            stdout: "Error output".to_string(),
            stderr: "Error message".to_string(),
        })]);
        let output = Output::capture();

        let result = run_command(&runner, &output, &argv(&["false"]), "Test command");

        assert!(!result.success);
        assert_eq!(result.launch_error, None);
        let texts: Vec<_> = output.lines().into_iter().map(|l| l.text).collect();
        assert_eq!(
            texts,
            vec![
                "🔧 Test command...",
                "❌ Test command failed",
                "Error output",
                "Error message",
            ]
        );
        assert!(output.lines()[1..].iter().all(|l| l.tone == Tone::Failure));
    }

    #[test]
    fn failure_with_empty_streams_prints_both_lines() {
        let runner = MockRunner::with_codes(&[2]);
        let output = Output::capture();

        run_command(&runner, &output, &argv(&["false"]), "Quiet tool");

        assert_eq!(output.lines().len(), 4);
    }

    #[test]
    fn launch_failure_is_reported_not_raised() {
        let runner = MockRunner::failing("Test error");
        let output = Output::capture();

        let result = run_command(&runner, &output, &argv(&["test"]), "Test command");

        assert!(!result.success);
        assert_eq!(result.launch_error.as_deref(), Some("Test error"));
        assert!(output.contains("❌ Error running Test command: Test error"));
    }

    #[cfg(unix)]
    #[test]
    fn missing_binary_through_process_runner() {
        let output = Output::capture();

        let result = run_command(
            &ProcessRunner,
            &output,
            &argv(&["tidy-no-such-binary-xyz", "--version"]),
            "Ghost tool",
        );

        assert!(!result.success);
        assert!(result.launch_error.is_some());
    }
}
