//! # Command-Line Interface
//!
//! User-facing CLI commands.
//!
//! ## Command Groups
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | Lint | Style, format, docstring and type checks | `lint run`, `lint run src/pkg --fix`, `lint init` |
//! | Pytest | Tests, with coverage for full runs | `pytest run`, `pytest run tests/test_x.py --logs`, `pytest init` |
//!
//! ## Settings
//!
//! `init` subcommands store default paths in the settings file. Use
//! `--settings <FILE>` (or `TIDY_SETTINGS`) to point at another file.
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug logs on stderr:
//! ```bash
//! tidy --verbose lint run
//! ```
//! `RUST_LOG` takes precedence when set.
//!
//! ## Output and Prompts
//!
//! Everything the user sees or answers goes through [`Output`] (toned status
//! lines and echoed tool output) and [`Prompter`] (confirmations and text
//! input). Both can be swapped for recording doubles in tests.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod lint_cmd;
mod output;
mod prompt;
mod pytest_cmd;

pub use app::{run, Cli, Commands, Context};
pub use lint_cmd::LintCommands;
pub use output::{Line, Output, Tone};
pub use prompt::{PromptError, Prompter, TerminalPrompter};
pub use pytest_cmd::PytestCommands;

#[cfg(test)]
pub use prompt::ScriptedPrompter;
