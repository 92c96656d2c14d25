//! Deterministic placeholder thread data for the workspace shell.
//!
//! There is no thread backend yet; the sidebar and composer are driven by a
//! pure function from the recent-project list to synthetic records. Same
//! inputs, same output — nothing here touches a clock or a store.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::project::RecentProject;

/// A thread row in the workspace sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceThreadSummary {
    pub id: String,
    pub title: String,
    pub opened_at: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpenTarget {
    Vscode,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApprovalMode {
    Submit,
    Auto,
    Review,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComposerEffort {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComposerMode {
    Plan,
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessLevel {
    ReadOnly,
    WorkspaceWrite,
    FullAccess,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadHeaderState {
    pub open_target: OpenTarget,
    pub approval_mode: ApprovalMode,
    pub usage_positive: u32,
    pub usage_negative: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadComposerPreset {
    pub draft: String,
    pub model: String,
    pub effort: ComposerEffort,
    pub mode: ComposerMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadStatusMeta {
    pub access_level: AccessLevel,
    pub branch_name: String,
}

/// Full state backing the thread panel: header, composer preset, status bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceThreadDetail {
    pub id: String,
    pub title: String,
    pub project_name: String,
    pub header: ThreadHeaderState,
    pub composer: ThreadComposerPreset,
    pub status_bar: ThreadStatusMeta,
}

#[derive(Debug, Clone, Default)]
pub struct MockWorkspaceData {
    pub details_by_id: HashMap<String, WorkspaceThreadDetail>,
    pub threads_by_project: HashMap<String, Vec<WorkspaceThreadSummary>>,
}

impl MockWorkspaceData {
    pub fn threads_for(&self, project_path: &str) -> &[WorkspaceThreadSummary] {
        self.threads_by_project
            .get(project_path)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

const THREAD_TIME_OFFSETS_MS: [i64; 5] = [
    12 * 60 * 1000,
    18 * 60 * 60 * 1000,
    5 * 24 * 60 * 60 * 1000,
    7 * 24 * 60 * 60 * 1000,
    14 * 24 * 60 * 60 * 1000,
];

const THREAD_TITLE_GROUPS: [[&str; 3]; 3] = [
    ["New thread", "Plan MVP tasks", "Release plan"],
    ["New thread", "Refactor map view", "Simplify settings"],
    ["New thread", "Fix directory validation", "Initialize desktop stack"],
];

/// Build the synthetic thread collection for the given projects.
///
/// `now_ms` anchors the thread timestamps; callers pass a fixed value when
/// they need reproducible output.
pub fn build_mock_workspace_data(projects: &[RecentProject], now_ms: i64) -> MockWorkspaceData {
    let mut data = MockWorkspaceData::default();

    for (project_index, project) in projects.iter().enumerate() {
        let titles = THREAD_TITLE_GROUPS[project_index % THREAD_TITLE_GROUPS.len()];
        let mut threads = Vec::with_capacity(titles.len());

        for (thread_index, title) in titles.iter().enumerate() {
            let id = format!("{}::thread-{}", project.path, thread_index + 1);
            let offset = THREAD_TIME_OFFSETS_MS
                [(project_index + thread_index) % THREAD_TIME_OFFSETS_MS.len()];
            let opened_at = now_ms - offset;

            let detail = WorkspaceThreadDetail {
                id: id.clone(),
                title: (*title).to_string(),
                project_name: project.name.clone(),
                header: ThreadHeaderState {
                    open_target: OpenTarget::Vscode,
                    approval_mode: if thread_index == 2 {
                        ApprovalMode::Review
                    } else {
                        ApprovalMode::Submit
                    },
                    usage_positive: 412 + (project_index as u32) * 103 + (thread_index as u32) * 58,
                    usage_negative: 34 + (project_index as u32) * 17 + (thread_index as u32) * 9,
                },
                composer: ThreadComposerPreset {
                    draft: String::new(),
                    model: if thread_index == 1 {
                        "GPT-5.3".to_string()
                    } else {
                        "GPT-5.3-Codex".to_string()
                    },
                    effort: if thread_index == 2 {
                        ComposerEffort::Medium
                    } else {
                        ComposerEffort::High
                    },
                    mode: if thread_index == 2 {
                        ComposerMode::Chat
                    } else {
                        ComposerMode::Plan
                    },
                },
                status_bar: ThreadStatusMeta {
                    access_level: if thread_index == 2 {
                        AccessLevel::WorkspaceWrite
                    } else {
                        AccessLevel::FullAccess
                    },
                    branch_name: if project_index == 0 {
                        "main".to_string()
                    } else {
                        format!("feature/{}", project.name)
                    },
                },
            };

            threads.push(WorkspaceThreadSummary {
                id: id.clone(),
                title: detail.title.clone(),
                opened_at,
            });
            data.details_by_id.insert(id, detail);
        }

        data.threads_by_project.insert(project.path.clone(), threads);
    }

    data
}
