//! # Storage Layer
//!
//! Persistence of user preferences across invocations.
//!
//! ## Storage Format
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Settings | Flat JSON object | `<config dir>/tidy-cli/settings.json` |
//!
//! The config directory comes from [`directories::ProjectDirs`]
//! (`~/.config` on Linux). The global `--settings` flag or the
//! `TIDY_SETTINGS` environment variable points the store elsewhere.
//!
//! ## Key Types
//!
//! - [`SettingsStore`] - Load, save and upsert settings
//! - [`PathSetting`] - A settings key with its built-in default

mod resolver;
mod settings;

pub use resolver::{
    init_settings, resolve_config_path, resolve_default_path, PathSetting, LINT_CONFIG_PATH,
    LINT_DEFAULT_PATH, PYTEST_CONFIG_PATH, PYTEST_DEFAULT_PATH,
};
pub use settings::{Settings, SettingsStore, SETTINGS_FILE_NAME};
