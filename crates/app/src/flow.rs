//! The project-open flow: validate, persist, refresh, commit.
//!
//! This is the only place repository calls are sequenced with side effects.
//! Errors never escape: every failure lands in `UiState::startup_error` and
//! the in-progress flag is reset on every exit path.

use tracing::{debug, warn};

use tars_core::{meta, RecentProject, RecentProjectInput};
use tars_local_db::{ProjectDb, StoreError};

use crate::messages;
use crate::ports::{DirectoryPicker, DirectoryProbe, PortError};
use crate::state::AppState;

/// How many recent projects the startup screen shows. Distinct from the
/// repository's `RETENTION_LIMIT` on purpose: the trim never follows a
/// caller's display limit.
pub const RECENT_DISPLAY_LIMIT: usize = 5;

#[derive(Debug, thiserror::Error)]
enum OpenError {
    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Port(#[from] PortError),
}

/// Re-read the recent list into workspace state and re-derive the selection.
pub async fn refresh_recent_projects(
    db: &ProjectDb,
    state: &mut AppState,
) -> Result<(), StoreError> {
    let projects = db.list_recent(RECENT_DISPLAY_LIMIT)?;
    state.workspace.set_recent_projects(projects);
    state.workspace.reconcile_selected_project();
    Ok(())
}

/// Open `path` as the current project. Returns whether the open committed.
///
/// A stale recent entry (the directory no longer exists) is removed from the
/// repository before the user sees the error — the list self-heals.
pub async fn open_project(
    db: &ProjectDb,
    probe: &dyn DirectoryProbe,
    state: &mut AppState,
    path: &str,
) -> bool {
    state.ui.is_opening_project = true;
    state.ui.clear_startup_error();

    let result = open_project_inner(db, probe, state, path).await;
    state.ui.is_opening_project = false;

    match result {
        Ok(opened) => opened,
        Err(e) => {
            warn!(path, error = %e, "project open failed");
            state.ui.set_startup_error(e.to_string());
            false
        }
    }
}

async fn open_project_inner(
    db: &ProjectDb,
    probe: &dyn DirectoryProbe,
    state: &mut AppState,
    path: &str,
) -> Result<bool, OpenError> {
    if !probe.directory_exists(path)? {
        debug!(path, "stale recent project, removing");
        db.remove_recent(path)?;
        refresh_recent_projects(db, state).await?;
        state.ui.set_startup_error(messages::PROJECT_PATH_UNAVAILABLE);
        return Ok(false);
    }

    db.upsert_recent(&RecentProjectInput::new(path))?;
    db.set_meta(meta::LAST_PROJECT_PATH, path)?;
    refresh_recent_projects(db, state).await?;

    state
        .workspace
        .set_current_project_path(Some(path.to_string()));
    state
        .workspace
        .set_selected_project_path(Some(path.to_string()));
    Ok(true)
}

/// Ask the picker for a directory and open it. Cancellation is a silent
/// no-op; picker failures surface like any other startup error.
pub async fn open_project_from_dialog(
    db: &ProjectDb,
    probe: &dyn DirectoryProbe,
    picker: &dyn DirectoryPicker,
    state: &mut AppState,
) {
    match picker.pick_directory() {
        Ok(Some(path)) => {
            open_project(db, probe, state, &path).await;
        }
        Ok(None) => {}
        Err(e) => state.ui.set_startup_error(e.to_string()),
    }
}

pub async fn open_recent_project(
    db: &ProjectDb,
    probe: &dyn DirectoryProbe,
    state: &mut AppState,
    project: &RecentProject,
) -> bool {
    open_project(db, probe, state, &project.path).await
}
