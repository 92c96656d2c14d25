use chrono::Utc;

use tars_app::AppState;
use tars_core::threads::MockWorkspaceData;
use tars_core::time::format_relative_opened_at;
use tars_core::RecentProject;

pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn print_recent(projects: &[RecentProject]) {
    if projects.is_empty() {
        println!("No recent projects.");
        return;
    }

    let now = now_ms();
    let name_width = projects.iter().map(|p| p.name.len()).max().unwrap_or(0);

    for project in projects {
        println!(
            "{:<name_width$}  {:>10}  {}",
            project.name,
            format_relative_opened_at(project.opened_at, now),
            project.path,
        );
    }
}

pub fn print_threads(state: &AppState, threads: &MockWorkspaceData) {
    let Some(project_path) = state.workspace.selected_project_path.as_deref() else {
        println!("No project selected.");
        return;
    };

    println!("Threads for {project_path}:");
    let now = now_ms();
    for thread in threads.threads_for(project_path) {
        let marker = if state.workspace.selected_thread_id.as_deref() == Some(&thread.id) {
            "*"
        } else {
            " "
        };
        println!(
            " {marker} {:<30} {:>10}",
            thread.title,
            format_relative_opened_at(thread.opened_at, now),
        );
    }

    let detail = state
        .workspace
        .selected_thread_id
        .as_deref()
        .and_then(|id| threads.details_by_id.get(id));
    if let Some(detail) = detail {
        println!();
        println!(
            "Selected: {} [{}] model={} branch={}",
            detail.title, detail.project_name, detail.composer.model, detail.status_bar.branch_name,
        );
    }
}
