//! # Test Flow
//!
//! Runs pytest from inside the default test directory.
//!
//! - With a target path: `pytest <path> -c <config> [-s]`
//! - Without: `coverage run -m pytest .` over the whole directory, followed
//!   by `coverage report` when the tests pass
//!
//! Whatever happens, the working directory is restored and test caches are
//! removed afterwards. Failing tests are reported but do not fail the
//! command; only a missing directory or a tool that cannot be started does.

mod cleanup;
mod orchestrator;
mod workdir;

pub use cleanup::{cleanup_test_cache, CACHE_DIRS, CACHE_FILES};
pub use orchestrator::{PytestError, PytestOptions, PytestReport, TestRun, COVERAGE_DATA_FILE};
pub use workdir::WorkdirGuard;

use anyhow::Result;

use crate::storage::{
    init_settings, Settings, SettingsStore, PYTEST_CONFIG_PATH, PYTEST_DEFAULT_PATH,
};
use crate::cli::{Output, Prompter};

/// Prompts for the pytest default directory and config file
pub fn init(store: &SettingsStore, prompter: &dyn Prompter, output: &Output) -> Result<Settings> {
    init_settings(
        store,
        prompter,
        output,
        "pytest",
        &[PYTEST_DEFAULT_PATH, PYTEST_CONFIG_PATH],
    )
}
