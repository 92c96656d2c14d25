//! Startup sequences: schema init + first recent-list load, then locale.
//!
//! The locale steps are gated on `db_ready`, mirroring the shell's startup
//! order: nothing reads `app_meta` before the schema pass has run.

use tracing::info;

use tars_core::locale::resolve_default_locale;
use tars_core::{meta, RecentProject};
use tars_local_db::{ProjectDb, StoreError};

use crate::flow::RECENT_DISPLAY_LIMIT;
use crate::state::AppState;

/// Ensure the schema, load the recent list, and mark the database ready.
/// Failures land in `startup_error`; the loading flag always ends `false`.
pub async fn bootstrap_workspace(db: &ProjectDb, state: &mut AppState) {
    let result: Result<Vec<RecentProject>, StoreError> = (|| {
        db.initialize()?;
        db.list_recent(RECENT_DISPLAY_LIMIT)
    })();

    match result {
        Ok(projects) => {
            info!(count = projects.len(), "workspace bootstrap complete");
            state.workspace.set_recent_projects(projects);
            state.workspace.reconcile_selected_project();
            state.workspace.set_db_ready(true);
        }
        Err(e) => state.ui.set_startup_error(e.to_string()),
    }

    state.ui.is_loading_recent = false;
}

/// Resolve the startup locale from the persisted `ui_locale` value and the
/// system locale tag. Runs once, and only after the database is ready.
pub async fn bootstrap_locale(db: &ProjectDb, state: &mut AppState, system_locale: Option<&str>) {
    if !state.workspace.db_ready || state.locale.bootstrapped {
        return;
    }

    match db.get_meta(meta::UI_LOCALE) {
        Ok(saved) => {
            let locale = resolve_default_locale(saved.as_deref(), system_locale);
            state.locale.set_locale(locale);
            state.locale.bootstrapped = true;
        }
        Err(e) => state.ui.set_startup_error(e.to_string()),
    }
}

/// Persist the current locale choice. No-op until the bootstrap has run.
pub async fn persist_locale(db: &ProjectDb, state: &mut AppState) {
    if !state.workspace.db_ready || !state.locale.bootstrapped {
        return;
    }

    if let Err(e) = db.set_meta(meta::UI_LOCALE, state.locale.locale.as_str()) {
        state.ui.set_startup_error(e.to_string());
    }
}

/// Current locale of the host environment, if detectable.
pub fn system_locale_tag() -> Option<String> {
    std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .or_else(|_| std::env::var("LANG"))
        .ok()
        .filter(|tag| !tag.is_empty())
}
