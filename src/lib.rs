//! tidy-cli - One command surface for Python linting and testing tools
//!
//! `tidy lint` runs ruff, pydoclint and mypy in a fixed order and sums up
//! how many passed. `tidy pytest` runs pytest, under coverage for full runs.
//! Default paths are kept in a small settings file between invocations.

pub mod storage;
pub mod runner;
pub mod lint;
pub mod pytest;
pub mod cli;

pub use storage::{Settings, SettingsStore};
pub use runner::{run_command, CommandRunner, ProcessRunner, ToolInvocation};
