//! Scoped change of the process working directory

use std::io;
use std::path::{Path, PathBuf};

/// Changes into a directory and changes back when dropped
///
/// Restoration happens on every exit path, including early returns and
/// unwinding panics.
#[derive(Debug)]
pub struct WorkdirGuard {
    previous: PathBuf,
}

impl WorkdirGuard {
    pub fn enter(path: &Path) -> io::Result<Self> {
        let previous = std::env::current_dir()?;
        std::env::set_current_dir(path)?;
        tracing::debug!(from = %previous.display(), to = %path.display(), "changed directory");
        Ok(Self { previous })
    }

    /// Directory that will be restored
    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for WorkdirGuard {
    fn drop(&mut self) {
        if let Err(err) = std::env::set_current_dir(&self.previous) {
            tracing::warn!("failed to restore working directory: {err}");
        }
    }
}
