//! Test run orchestration
//!
//! The test runner is started from inside the default test directory because
//! pytest resolves its `-c` config path relative to the working directory.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::cleanup::cleanup_test_cache;
use super::workdir::WorkdirGuard;
use crate::runner::CommandRunner;
use crate::storage::{resolve_config_path, resolve_default_path, SettingsStore};
use crate::storage::{PYTEST_CONFIG_PATH, PYTEST_DEFAULT_PATH};
use crate::cli::Output;

/// Coverage data file written by `coverage run`
pub const COVERAGE_DATA_FILE: &str = ".coverage";

#[derive(Debug, Error)]
pub enum PytestError {
    #[error("Default directory not found: {0}")]
    RootNotFound(PathBuf),

    #[error("Test path not found: {0}")]
    TestPathNotFound(PathBuf),

    #[error("Error running tests: {0}")]
    Run(#[source] io::Error),

    #[error(transparent)]
    Settings(#[from] anyhow::Error),
}

/// Options for one test run
#[derive(Debug, Clone, Default)]
pub struct PytestOptions {
    /// Test file or directory under the default test directory
    pub path: Option<PathBuf>,
    /// Let test output through instead of capturing it
    pub logs: bool,
}

/// Outcome of a test run that got as far as running pytest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PytestReport {
    /// Whether the primary test command exited 0
    pub passed: bool,
    /// Whether the run was the whole-tree run under coverage
    pub coverage: bool,
    /// Number of external commands started
    pub invocations: usize,
}

/// Runs pytest (optionally under coverage) with injected collaborators
pub struct TestRun<'a> {
    store: &'a SettingsStore,
    runner: &'a dyn CommandRunner,
    output: &'a Output,
}

impl<'a> TestRun<'a> {
    pub fn new(store: &'a SettingsStore, runner: &'a dyn CommandRunner, output: &'a Output) -> Self {
        Self {
            store,
            runner,
            output,
        }
    }

    /// Validates the targets, runs the tests and cleans up
    ///
    /// Failing tests are not an error: they show up as
    /// `PytestReport::passed == false`. The working directory is restored
    /// on every path.
    pub fn run(&self, options: &PytestOptions) -> Result<PytestReport, PytestError> {
        let root = resolve_default_path(self.store, PYTEST_DEFAULT_PATH)?;
        if !root.exists() {
            self.output
                .error(&format!("❌ Default directory not found: {}", root.display()));
            return Err(PytestError::RootNotFound(root));
        }

        if let Some(path) = &options.path {
            if !root.join(path).exists() {
                self.output
                    .error(&format!("❌ Test path not found: {}", path.display()));
                return Err(PytestError::TestPathNotFound(path.clone()));
            }
        }

        let config = resolve_config_path(self.store, PYTEST_CONFIG_PATH)?;
        tracing::debug!(root = %root.display(), %config, logs = options.logs, "starting test run");

        let outcome = self.run_in(&root, options, &config);

        match outcome {
            Ok(report) => {
                if !report.passed {
                    self.output.error("❌ Some tests failed");
                } else if report.coverage {
                    self.output
                        .success("✅ Tests and coverage completed successfully");
                } else {
                    self.output.success("✅ Tests completed successfully");
                }
                Ok(report)
            }
            Err(e) => {
                self.output.error(&format!("❌ Error running tests: {}", e));
                Err(PytestError::Run(e))
            }
        }
    }

    /// Runs inside `root`, then restores the directory and cleans caches
    fn run_in(&self, root: &Path, options: &PytestOptions, config: &str) -> io::Result<PytestReport> {
        let guard = match WorkdirGuard::enter(root) {
            Ok(guard) => guard,
            Err(e) => {
                let base = std::env::current_dir()?;
                cleanup_test_cache(&base, self.output);
                return Err(e);
            }
        };
        let base = guard.previous().to_path_buf();

        let outcome = self.execute(options, config);

        drop(guard);
        cleanup_test_cache(&base, self.output);

        outcome
    }

    fn execute(&self, options: &PytestOptions, config: &str) -> io::Result<PytestReport> {
        if options.logs {
            self.output.info("🔊 Showing logs...");
        } else {
            self.output.info("🔇 Not showing logs...");
        }

        let Some(path) = &options.path else {
            return self.execute_with_coverage(options, config);
        };

        self.output
            .info(&format!("🧪 Running tests for: {}", path.display()));
        let mut argv = vec![
            "pytest".to_string(),
            path.display().to_string(),
            "-c".to_string(),
            config.to_string(),
        ];
        if options.logs {
            argv.push("-s".to_string());
        }

        let code = self.runner.stream(&argv)?;
        Ok(PytestReport {
            passed: code == 0,
            coverage: false,
            invocations: 1,
        })
    }

    fn execute_with_coverage(&self, options: &PytestOptions, config: &str) -> io::Result<PytestReport> {
        self.output
            .info("🧪 Running all tests with coverage for: .");
        let mut argv: Vec<String> = [
            "coverage", "run", "--rcfile", config, "-m", "pytest", ".", "-c", config,
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        if options.logs {
            argv.push("-s".to_string());
        }

        let code = self.runner.stream(&argv)?;
        if code != 0 {
            return Ok(PytestReport {
                passed: false,
                coverage: true,
                invocations: 1,
            });
        }

        self.output.info("📊 Displaying coverage report...");
        let report: Vec<String> = ["coverage", "report", "-m", "--rcfile", config]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let report_code = self.runner.stream(&report)?;
        if report_code != 0 {
            tracing::debug!(code = report_code, "coverage report exited non-zero");
        }

        match fs::remove_file(COVERAGE_DATA_FILE) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("could not remove {COVERAGE_DATA_FILE}: {e}"),
        }

        Ok(PytestReport {
            passed: true,
            coverage: true,
            invocations: 2,
        })
    }
}
