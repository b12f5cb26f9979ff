//! Lint run orchestration
//!
//! Runs the tools from [`TOOLS`] one after another against a single target
//! and folds their results into a [`RunAggregate`].

use std::collections::BTreeSet;
use std::path::PathBuf;

use thiserror::Error;

use super::tools::{ToolId, TOOLS};
use crate::runner::{run_command, CommandRunner, ToolInvocation};
use crate::storage::{resolve_config_path, resolve_default_path, SettingsStore};
use crate::storage::{LINT_CONFIG_PATH, LINT_DEFAULT_PATH};
use crate::cli::{Output, PromptError, Prompter, Tone};

#[derive(Debug, Error)]
pub enum LintError {
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Settings(#[from] anyhow::Error),
}

/// Options for one lint run
#[derive(Debug, Clone, Default)]
pub struct LintOptions {
    /// Target relative to the default lint directory
    pub path: Option<PathBuf>,
    pub fix: bool,
    /// Ask before each tool
    pub interactive: bool,
    pub skip: BTreeSet<ToolId>,
}

/// Attempted/succeeded counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunAggregate {
    pub attempted: usize,
    pub succeeded: usize,
}

/// Overall verdict derived from a [`RunAggregate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// No tool ran
    Empty,
    AllPassed,
    /// At least one tool failed
    Partial,
}

impl RunAggregate {
    pub fn record(&mut self, success: bool) {
        self.attempted += 1;
        if success {
            self.succeeded += 1;
        }
    }

    pub fn status(&self) -> RunStatus {
        if self.attempted == 0 {
            RunStatus::Empty
        } else if self.succeeded == self.attempted {
            RunStatus::AllPassed
        } else {
            RunStatus::Partial
        }
    }

    /// Summary line for the end of a run
    pub fn summary(&self) -> (Tone, String) {
        match self.status() {
            RunStatus::Empty => (Tone::Info, "ℹ️ No linting tools were run".to_string()),
            RunStatus::AllPassed => (
                Tone::Success,
                format!(
                    "🎉 All {} linting tools completed successfully",
                    self.attempted
                ),
            ),
            RunStatus::Partial => (
                Tone::Warning,
                format!(
                    "⚠️ {}/{} linting tools completed successfully",
                    self.succeeded, self.attempted
                ),
            ),
        }
    }
}

/// Result of a completed lint run
#[derive(Debug, Clone)]
pub struct LintReport {
    pub target: PathBuf,
    pub aggregate: RunAggregate,
    pub invocations: Vec<ToolInvocation>,
}

/// Runs the lint tools with injected collaborators
pub struct Linter<'a> {
    store: &'a SettingsStore,
    runner: &'a dyn CommandRunner,
    prompter: &'a dyn Prompter,
    output: &'a Output,
}

impl<'a> Linter<'a> {
    pub fn new(
        store: &'a SettingsStore,
        runner: &'a dyn CommandRunner,
        prompter: &'a dyn Prompter,
        output: &'a Output,
    ) -> Self {
        Self {
            store,
            runner,
            prompter,
            output,
        }
    }

    /// Runs every non-skipped tool in order
    ///
    /// Only a missing target is an error. Tool failures end up in the
    /// returned aggregate.
    pub fn run(&self, options: &LintOptions) -> Result<LintReport, LintError> {
        let default_dir = resolve_default_path(self.store, LINT_DEFAULT_PATH)?;
        let target = match &options.path {
            Some(path) => default_dir.join(path),
            None => default_dir,
        };

        if !target.exists() {
            self.output
                .error(&format!("❌ Path not found: {}", target.display()));
            return Err(LintError::PathNotFound(target));
        }

        let config = resolve_config_path(self.store, LINT_CONFIG_PATH)?;
        tracing::debug!(target = %target.display(), %config, fix = options.fix, "starting lint run");

        self.output
            .info(&format!("🔍 Linting: {}", target.display()));
        if options.fix {
            self.output.info("🛠️ Fix mode enabled");
        }

        let mut aggregate = RunAggregate::default();
        let mut invocations = Vec::new();

        for tool in TOOLS.iter().filter(|t| !options.skip.contains(&t.id)) {
            if options.interactive
                && !self.prompter.confirm(&format!("Run {}?", tool.label), true)?
            {
                self.output.info(&format!("⏭️ Skipping {}", tool.label));
                continue;
            }

            let argv = tool.argv(&target, &config, options.fix);
            let invocation = run_command(self.runner, self.output, &argv, tool.label);
            aggregate.record(invocation.success);
            invocations.push(invocation);
        }

        let (tone, message) = aggregate.summary();
        self.output.emit(tone, &message);

        Ok(LintReport {
            target,
            aggregate,
            invocations,
        })
    }
}
