//! Persistent user settings
//!
//! Settings are a flat JSON object of string keys to string values stored in
//! `~/.config/tidy-cli/settings.json` (or the platform equivalent).

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

/// Flat key/value settings
pub type Settings = BTreeMap<String, String>;

/// File name of the settings file inside the config directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Store for user settings in a single JSON file
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Creates a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates the store at the default user location
    pub fn open_default() -> Result<Self> {
        let dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(Self::new(dir.join(SETTINGS_FILE_NAME)))
    }

    /// Returns the user config directory for tidy-cli
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "tidy", "tidy-cli").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the path to the settings file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads settings from disk
    ///
    /// A missing file yields empty settings. So does a file that is not a
    /// flat JSON object of strings, including one that is not valid UTF-8:
    /// malformed settings are never an error.
    pub fn load(&self) -> Result<Settings> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Settings::new()),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read settings: {}", self.path.display())
                })
            }
        };

        match serde_json::from_slice(&content) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::debug!(
                    path = %self.path.display(),
                    error = %e,
                    "ignoring malformed settings file"
                );
                Ok(Settings::new())
            }
        }
    }

    /// Writes the full settings map, replacing whatever was stored
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
        }

        let temp_path = self.path.with_extension("json.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            let mut writer = BufWriter::new(&file);
            serde_json::to_writer_pretty(&mut writer, settings)
                .context("Failed to serialize settings")?;
            writeln!(writer).context("Failed to write settings")?;
            writer.flush().context("Failed to flush settings")?;
        }

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        tracing::debug!(path = %self.path.display(), keys = settings.len(), "saved settings");
        Ok(())
    }

    /// Merges `partial` into the stored settings and saves the result
    ///
    /// New keys are inserted, existing keys overwritten, untouched keys kept.
    /// Returns the merged settings.
    pub fn update(&self, partial: &Settings) -> Result<Settings> {
        let mut settings = self.load()?;
        settings.extend(partial.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.save(&settings)?;
        Ok(settings)
    }
}
