//! # Lint Flow
//!
//! Runs the Python lint tools against one target, in a fixed order:
//!
//! | Order | Skip flag          | Tool                         |
//! |-------|--------------------|------------------------------|
//! | 1     | `--skip-ruff`      | `ruff check` (supports `--fix`) |
//! | 2     | `--skip-format`    | `ruff format`                |
//! | 3     | `--skip-pydoclint` | `pydoclint`                  |
//! | 4     | `--skip-mypy`      | `mypy`                       |
//!
//! A failing tool never fails the run: the run ends with an
//! `all passed` or `S/N passed` summary and exit code 0. Only a missing
//! target path is fatal.

mod orchestrator;
mod tools;

pub use orchestrator::{LintError, LintOptions, LintReport, Linter, RunAggregate, RunStatus};
pub use tools::{Tool, ToolId, TOOLS};

use anyhow::Result;

use crate::storage::{init_settings, Settings, SettingsStore, LINT_CONFIG_PATH, LINT_DEFAULT_PATH};
use crate::cli::{Output, Prompter};

/// Prompts for the lint default directory and config file
pub fn init(store: &SettingsStore, prompter: &dyn Prompter, output: &Output) -> Result<Settings> {
    init_settings(
        store,
        prompter,
        output,
        "lint",
        &[LINT_DEFAULT_PATH, LINT_CONFIG_PATH],
    )
}
