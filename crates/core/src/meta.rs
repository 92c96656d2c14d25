//! Persisted `app_meta` keys shared across crates.

/// Path of the last successfully opened project.
pub const LAST_PROJECT_PATH: &str = "last_project_path";

/// Interface language code ("en", "zh-CN").
pub const UI_LOCALE: &str = "ui_locale";
