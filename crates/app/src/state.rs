//! In-memory state containers for the launcher shell.
//!
//! Nothing here does I/O. The containers are plain structs with explicit
//! mutators, passed by reference into the flows — no ambient singletons.
//! Session state is rebuilt from scratch each process start.

use tars_core::locale::Locale;
use tars_core::threads::MockWorkspaceData;
use tars_core::RecentProject;

/// Which project and thread the user is currently looking at.
#[derive(Debug, Default)]
pub struct WorkspaceState {
    /// The project the user has committed to opening.
    pub current_project_path: Option<String>,
    pub recent_projects: Vec<RecentProject>,
    /// Transient sidebar focus, reset when the underlying collection changes.
    pub selected_project_path: Option<String>,
    pub selected_thread_id: Option<String>,
    pub db_ready: bool,
}

impl WorkspaceState {
    pub fn set_current_project_path(&mut self, path: Option<String>) {
        self.current_project_path = path;
    }

    pub fn set_recent_projects(&mut self, projects: Vec<RecentProject>) {
        self.recent_projects = projects;
    }

    pub fn set_selected_project_path(&mut self, path: Option<String>) {
        self.selected_project_path = path;
    }

    pub fn set_selected_thread_id(&mut self, id: Option<String>) {
        self.selected_thread_id = id;
    }

    pub fn set_db_ready(&mut self, ready: bool) {
        self.db_ready = ready;
    }

    /// Re-derive the selected project after the recent list changed: if the
    /// selection is no longer in the list, fall back to the first known
    /// project (or none). Idempotent.
    pub fn reconcile_selected_project(&mut self) {
        let still_known = self
            .selected_project_path
            .as_deref()
            .is_some_and(|selected| self.recent_projects.iter().any(|p| p.path == selected));

        if !still_known {
            self.selected_project_path = self.recent_projects.first().map(|p| p.path.clone());
        }
    }

    /// Re-derive the selected thread against the selected project's threads:
    /// a selection outside that set falls back to the project's first thread
    /// (or none). Idempotent.
    pub fn reconcile_selected_thread(&mut self, threads: &MockWorkspaceData) {
        let project_threads = match self.selected_project_path.as_deref() {
            Some(path) => threads.threads_for(path),
            None => &[],
        };

        let still_known = self
            .selected_thread_id
            .as_deref()
            .is_some_and(|selected| project_threads.iter().any(|t| t.id == selected));

        if !still_known {
            self.selected_thread_id = project_threads.first().map(|t| t.id.clone());
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// UI chrome state. Every failure in the shell degrades to `startup_error`;
/// nothing is fatal to the process.
#[derive(Debug)]
pub struct UiState {
    pub theme: ThemeMode,
    pub startup_error: String,
    pub is_loading_recent: bool,
    pub is_opening_project: bool,
    pub is_settings_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            startup_error: String::new(),
            is_loading_recent: true,
            is_opening_project: false,
            is_settings_open: false,
        }
    }
}

impl UiState {
    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
    }

    pub fn set_startup_error(&mut self, message: impl Into<String>) {
        self.startup_error = message.into();
    }

    pub fn clear_startup_error(&mut self) {
        self.startup_error.clear();
    }
}

#[derive(Debug, Default)]
pub struct LocaleState {
    pub locale: Locale,
    pub bootstrapped: bool,
}

impl LocaleState {
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }
}

/// Root state handle threaded through the flows.
#[derive(Debug, Default)]
pub struct AppState {
    pub workspace: WorkspaceState,
    pub ui: UiState,
    pub locale: LocaleState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tars_core::threads::build_mock_workspace_data;

    fn projects(paths: &[&str]) -> Vec<RecentProject> {
        paths
            .iter()
            .enumerate()
            .map(|(i, path)| RecentProject {
                path: path.to_string(),
                name: tars_core::project_display_name(path),
                opened_at: 100 + i as i64,
            })
            .collect()
    }

    #[test]
    fn test_reconcile_project_keeps_known_selection() {
        let mut state = WorkspaceState::default();
        state.set_recent_projects(projects(&["/a", "/b"]));
        state.set_selected_project_path(Some("/b".to_string()));

        state.reconcile_selected_project();
        assert_eq!(state.selected_project_path.as_deref(), Some("/b"));
    }

    #[test]
    fn test_reconcile_project_falls_back_to_first() {
        let mut state = WorkspaceState::default();
        state.set_recent_projects(projects(&["/a", "/b"]));
        state.set_selected_project_path(Some("/gone".to_string()));

        state.reconcile_selected_project();
        assert_eq!(state.selected_project_path.as_deref(), Some("/a"));
    }

    #[test]
    fn test_reconcile_project_empty_list_clears_selection() {
        let mut state = WorkspaceState::default();
        state.set_selected_project_path(Some("/gone".to_string()));

        state.reconcile_selected_project();
        assert_eq!(state.selected_project_path, None);
    }

    #[test]
    fn test_reconcile_project_is_idempotent() {
        let mut state = WorkspaceState::default();
        state.set_recent_projects(projects(&["/a", "/b"]));
        state.set_selected_project_path(Some("/gone".to_string()));

        state.reconcile_selected_project();
        let first = state.selected_project_path.clone();
        state.reconcile_selected_project();
        assert_eq!(state.selected_project_path, first);
    }

    #[test]
    fn test_reconcile_thread_follows_selected_project() {
        let ps = projects(&["/a", "/b"]);
        let threads = build_mock_workspace_data(&ps, 1_700_000_000_000);

        let mut state = WorkspaceState::default();
        state.set_recent_projects(ps);
        state.set_selected_project_path(Some("/b".to_string()));
        state.set_selected_thread_id(Some("/a::thread-1".to_string()));

        // The selected thread belongs to another project: fall back to the
        // first thread of /b.
        state.reconcile_selected_thread(&threads);
        assert_eq!(state.selected_thread_id.as_deref(), Some("/b::thread-1"));

        state.reconcile_selected_thread(&threads);
        assert_eq!(state.selected_thread_id.as_deref(), Some("/b::thread-1"));
    }

    #[test]
    fn test_reconcile_thread_no_project_clears_selection() {
        let threads = build_mock_workspace_data(&[], 1_700_000_000_000);
        let mut state = WorkspaceState::default();
        state.set_selected_thread_id(Some("/a::thread-1".to_string()));

        state.reconcile_selected_thread(&threads);
        assert_eq!(state.selected_thread_id, None);
    }

    #[test]
    fn test_theme_toggle() {
        let mut ui = UiState::default();
        assert_eq!(ui.theme, ThemeMode::Light);
        ui.toggle_theme();
        assert_eq!(ui.theme, ThemeMode::Dark);
        ui.toggle_theme();
        assert_eq!(ui.theme, ThemeMode::Light);
    }
}
