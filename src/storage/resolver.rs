//! Effective path resolution and the interactive `init` flow
//!
//! Every lookup reads the settings file afresh. The stored value for a key
//! wins over the built-in default.

use std::path::PathBuf;

use anyhow::Result;

use super::{Settings, SettingsStore};
use crate::cli::{Output, Prompter};

/// A configurable path: settings key plus built-in default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSetting {
    pub key: &'static str,
    pub default: &'static str,
    /// Human-readable name used in prompts and reports
    pub name: &'static str,
    /// Emoji prefix for the post-init report
    pub icon: &'static str,
}

pub const LINT_DEFAULT_PATH: PathSetting = PathSetting {
    key: "lint_default_path",
    default: "src",
    name: "Lint default directory",
    icon: "📁",
};

pub const LINT_CONFIG_PATH: PathSetting = PathSetting {
    key: "lint_config_path",
    default: "pyproject.toml",
    name: "Lint config file path",
    icon: "📄",
};

pub const PYTEST_DEFAULT_PATH: PathSetting = PathSetting {
    key: "pytest_default_path",
    default: "src",
    name: "Pytest default directory",
    icon: "📁",
};

/// Relative to the pytest default directory, which the test flow runs from
pub const PYTEST_CONFIG_PATH: PathSetting = PathSetting {
    key: "pytest_config_path",
    default: "../pyproject.toml",
    name: "Pytest config file path",
    icon: "📄",
};

impl PathSetting {
    /// Returns the stored value, or the default when unset
    pub fn value_in<'a>(&self, settings: &'a Settings) -> &'a str {
        settings.get(self.key).map(String::as_str).unwrap_or(self.default)
    }
}

/// Resolves a directory setting to a path
pub fn resolve_default_path(store: &SettingsStore, setting: PathSetting) -> Result<PathBuf> {
    let settings = store.load()?;
    Ok(PathBuf::from(setting.value_in(&settings)))
}

/// Resolves a config file setting to the string passed to tools
pub fn resolve_config_path(store: &SettingsStore, setting: PathSetting) -> Result<String> {
    let settings = store.load()?;
    Ok(setting.value_in(&settings).to_string())
}

/// Prompts for each setting and stores the answers
///
/// Only the answered keys are passed to [`SettingsStore::update`], so
/// unrelated stored settings survive. Returns the merged settings.
pub fn init_settings(
    store: &SettingsStore,
    prompter: &dyn Prompter,
    output: &Output,
    title: &str,
    fields: &[PathSetting],
) -> Result<Settings> {
    output.info(&format!("⚙️ Configuring {} settings", title));

    let current = store.load()?;
    let mut answers = Settings::new();
    for field in fields {
        let answer = prompter.input(field.name, field.value_in(&current))?;
        answers.insert(field.key.to_string(), answer.trim().to_string());
    }

    let merged = store.update(&answers)?;
    tracing::debug!(keys = ?answers.keys().collect::<Vec<_>>(), "updated settings");

    output.success(&format!("✅ Settings saved to {}", store.path().display()));
    for field in fields {
        output.info(&format!("{} {}: {}", field.icon, field.name, field.value_in(&merged)));
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SETTINGS_FILE_NAME;
    use crate::cli::ScriptedPrompter;
    use std::path::Path;
    use tempfile::TempDir;

    fn store_with(dir: &TempDir, pairs: &[(&str, &str)]) -> SettingsStore {
        let store = SettingsStore::new(dir.path().join(SETTINGS_FILE_NAME));
        let settings: Settings = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        store.save(&settings).unwrap();
        store
    }

    #[test]
    fn default_path_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, &[]);

        assert_eq!(
            resolve_default_path(&store, LINT_DEFAULT_PATH).unwrap(),
            PathBuf::from("src")
        );
        assert_eq!(
            resolve_default_path(&store, PYTEST_DEFAULT_PATH).unwrap(),
            PathBuf::from("src")
        );
    }

    #[test]
    fn default_path_from_settings() {
        let dir = TempDir::new().unwrap();
        let store = store_with(
            &dir,
            &[
                ("lint_default_path", "custom_path"),
                ("pytest_default_path", "custom_tests"),
            ],
        );

        assert_eq!(
            resolve_default_path(&store, LINT_DEFAULT_PATH).unwrap(),
            PathBuf::from("custom_path")
        );
        assert_eq!(
            resolve_default_path(&store, PYTEST_DEFAULT_PATH).unwrap(),
            PathBuf::from("custom_tests")
        );
    }

    #[test]
    fn config_path_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, &[]);

        assert_eq!(
            resolve_config_path(&store, LINT_CONFIG_PATH).unwrap(),
            "pyproject.toml"
        );
        assert_eq!(
            resolve_config_path(&store, PYTEST_CONFIG_PATH).unwrap(),
            "../pyproject.toml"
        );
    }

    #[test]
    fn config_path_from_settings() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, &[("lint_config_path", "custom.toml")]);

        assert_eq!(
            resolve_config_path(&store, LINT_CONFIG_PATH).unwrap(),
            "custom.toml"
        );
    }

    #[test]
    fn resolution_reads_settings_every_time() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, &[]);
        assert_eq!(
            resolve_default_path(&store, LINT_DEFAULT_PATH).unwrap(),
            Path::new("src")
        );

        store
            .update(&Settings::from([(
                "lint_default_path".to_string(),
                "lib".to_string(),
            )]))
            .unwrap();

        assert_eq!(
            resolve_default_path(&store, LINT_DEFAULT_PATH).unwrap(),
            Path::new("lib")
        );
    }

    #[test]
    fn init_with_no_settings_offers_defaults() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path().join("cfg").join(SETTINGS_FILE_NAME));
        let prompter = ScriptedPrompter::with_inputs(&["custom_src", "custom.toml"]);
        let output = Output::capture();

        init_settings(
            &store,
            &prompter,
            &output,
            "lint",
            &[LINT_DEFAULT_PATH, LINT_CONFIG_PATH],
        )
        .unwrap();

        assert_eq!(
            prompter.asked(),
            vec![
                ("Lint default directory".to_string(), "src".to_string()),
                ("Lint config file path".to_string(), "pyproject.toml".to_string()),
            ]
        );
        let stored = store.load().unwrap();
        assert_eq!(stored["lint_default_path"], "custom_src");
        assert_eq!(stored["lint_config_path"], "custom.toml");
        assert!(output.contains("📁 Lint default directory: custom_src"));
        assert!(output.contains("📄 Lint config file path: custom.toml"));
    }

    #[test]
    fn init_offers_existing_values_and_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let store = store_with(
            &dir,
            &[
                ("pytest_default_path", "existing_tests"),
                ("pytest_config_path", "existing.toml"),
                ("lint_default_path", "lib"),
            ],
        );
        let prompter = ScriptedPrompter::with_inputs(&["new_tests", "new.toml"]);
        let output = Output::capture();

        let merged = init_settings(
            &store,
            &prompter,
            &output,
            "pytest",
            &[PYTEST_DEFAULT_PATH, PYTEST_CONFIG_PATH],
        )
        .unwrap();

        assert_eq!(prompter.asked()[0].1, "existing_tests");
        assert_eq!(prompter.asked()[1].1, "existing.toml");
        assert_eq!(merged["pytest_default_path"], "new_tests");
        assert_eq!(merged["pytest_config_path"], "new.toml");
        assert_eq!(merged["lint_default_path"], "lib");
        assert!(output
            .lines()
            .iter()
            .any(|line| line.text.starts_with("✅ Settings saved to")));
    }
}
