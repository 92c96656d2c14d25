//! Human-readable messages surfaced through `UiState::startup_error`.

pub const PROJECT_PATH_UNAVAILABLE: &str =
    "Project folder is no longer available and was removed from recent projects.";
