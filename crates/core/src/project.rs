use serde::{Deserialize, Serialize};

/// A previously opened local project directory, tracked for quick re-access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentProject {
    /// Absolute filesystem path; unique identifier.
    pub path: String,
    /// Display name, derived from the final path segment at write time.
    pub name: String,
    /// Milliseconds since epoch of the last open; determines ordering.
    pub opened_at: i64,
}

/// Write-side input for the recent-projects table.
#[derive(Debug, Clone)]
pub struct RecentProjectInput {
    pub path: String,
    pub name: String,
    /// Defaults to "now" when absent.
    pub opened_at: Option<i64>,
}

impl RecentProjectInput {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = project_display_name(&path);
        Self {
            path,
            name,
            opened_at: None,
        }
    }
}

/// Derive the display name for a project path: normalize separators, take the
/// last non-empty segment, fall back to the original string (e.g. for `/`).
pub fn project_display_name(path: &str) -> String {
    path.replace('\\', "/")
        .split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()
        .unwrap_or(path)
        .to_string()
}
