use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

use tars_core::{RecentProject, RecentProjectInput};

/// Maximum persisted recent-project rows. The post-upsert trim always uses
/// this constant, never the display limit a caller passes to `list_recent`.
pub const RETENTION_LIMIT: usize = 5;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS recent_projects (
    path TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    opened_at INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_recent_projects_opened_at
    ON recent_projects(opened_at DESC);
CREATE TABLE IF NOT EXISTS app_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at INTEGER NOT NULL
);
";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("create directory for {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("open database {path}: {source}")]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },

    #[error("could not determine home directory")]
    NoHomeDir,

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Local SQLite database backing the launcher shell.
/// Thread-safe: wraps the connection in a Mutex so it can be shared via `Arc<ProjectDb>`.
pub struct ProjectDb {
    conn: Mutex<Connection>,
}

impl ProjectDb {
    /// Open (or create) the database at the default path.
    /// `~/.local/share/tars/tars.db`
    pub fn open() -> Result<Self> {
        let path = default_db_path()?;
        Self::open_path(&path)
    }

    /// Open (or create) the database at a specific path.
    pub fn open_path(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: path.to_path_buf(),
                source,
            })?;
        }
        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        let db = Self {
            conn: Mutex::new(conn),
        };
        db.initialize()?;
        Ok(db)
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().expect("project db mutex poisoned")
    }

    /// Ensure the schema exists. Idempotent; safe to call repeatedly.
    pub fn initialize(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA)?;
        Ok(())
    }

    // ── Recent projects ────────────────────────────────────────────────

    /// Recent projects ordered by `opened_at` descending, at most `limit` rows.
    pub fn list_recent(&self, limit: usize) -> Result<Vec<RecentProject>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT path, name, opened_at FROM recent_projects \
             ORDER BY opened_at DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok(RecentProject {
                path: row.get(0)?,
                name: row.get(1)?,
                opened_at: row.get(2)?,
            })
        })?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    /// Insert or refresh a recent-project row, then trim the table back to
    /// `RETENTION_LIMIT` rows by `opened_at` descending.
    ///
    /// The two statements are deliberately not wrapped in a transaction: a
    /// crash in between leaves extra rows that the next upsert trims away.
    pub fn upsert_recent(&self, input: &RecentProjectInput) -> Result<()> {
        let opened_at = input.opened_at.unwrap_or_else(now_ms);
        debug!(path = %input.path, opened_at, "upsert recent project");

        let conn = self.conn();
        conn.execute(
            "INSERT INTO recent_projects (path, name, opened_at) VALUES (?1, ?2, ?3) \
             ON CONFLICT(path) DO UPDATE SET \
              name = excluded.name, opened_at = excluded.opened_at",
            params![&input.path, &input.name, opened_at],
        )?;
        conn.execute(
            "DELETE FROM recent_projects WHERE path IN \
             (SELECT path FROM recent_projects ORDER BY opened_at DESC LIMIT -1 OFFSET ?1)",
            params![RETENTION_LIMIT as i64],
        )?;
        Ok(())
    }

    /// Delete the row for `path`. Missing rows are a no-op, not an error.
    pub fn remove_recent(&self, path: &str) -> Result<()> {
        debug!(path, "remove recent project");
        self.conn().execute(
            "DELETE FROM recent_projects WHERE path = ?1",
            params![path],
        )?;
        Ok(())
    }

    // ── App metadata ───────────────────────────────────────────────────

    pub fn get_meta(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn()
            .query_row(
                "SELECT value FROM app_meta WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn set_meta(&self, key: &str, value: &str) -> Result<()> {
        self.conn().execute(
            "INSERT INTO app_meta (key, value, updated_at) VALUES (?1, ?2, ?3) \
             ON CONFLICT(key) DO UPDATE SET \
              value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now_ms()],
        )?;
        Ok(())
    }
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

fn default_db_path() -> Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| StoreError::NoHomeDir)?;
    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("tars")
        .join("tars.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db() -> ProjectDb {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.keep().join("test.db");
        ProjectDb::open_path(&path).unwrap()
    }

    fn input(path: &str, opened_at: i64) -> RecentProjectInput {
        RecentProjectInput {
            path: path.to_string(),
            name: tars_core::project_display_name(path),
            opened_at: Some(opened_at),
        }
    }

    #[test]
    fn test_open_is_idempotent() {
        let db = test_db();
        db.initialize().unwrap();
        db.initialize().unwrap();
    }

    #[test]
    fn test_empty_list() {
        let db = test_db();
        assert!(db.list_recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_single_upsert_round_trip() {
        let db = test_db();
        db.upsert_recent(&input("/tmp/repo-a", 100)).unwrap();

        let rows = db.list_recent(5).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].path, "/tmp/repo-a");
        assert_eq!(rows[0].name, "repo-a");
        assert_eq!(rows[0].opened_at, 100);
    }

    #[test]
    fn test_upsert_updates_in_place() {
        let db = test_db();
        db.upsert_recent(&input("/tmp/repo-a", 100)).unwrap();
        db.upsert_recent(&RecentProjectInput {
            path: "/tmp/repo-a".to_string(),
            name: "renamed".to_string(),
            opened_at: Some(200),
        })
        .unwrap();

        let rows = db.list_recent(5).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "renamed");
        assert_eq!(rows[0].opened_at, 200);
    }

    #[test]
    fn test_retention_trims_oldest() {
        let db = test_db();
        for i in 1..=6 {
            db.upsert_recent(&input(&format!("/tmp/repo-{i}"), i)).unwrap();
        }

        // Asking for more than the retention limit still yields at most 5.
        let rows = db.list_recent(10).unwrap();
        assert_eq!(rows.len(), RETENTION_LIMIT);
        assert_eq!(rows[0].path, "/tmp/repo-6");
        assert!(rows.iter().all(|p| p.path != "/tmp/repo-1"));
    }

    #[test]
    fn test_list_is_sorted_descending() {
        let db = test_db();
        db.upsert_recent(&input("/tmp/b", 50)).unwrap();
        db.upsert_recent(&input("/tmp/c", 300)).unwrap();
        db.upsert_recent(&input("/tmp/a", 120)).unwrap();

        let rows = db.list_recent(5).unwrap();
        let times: Vec<i64> = rows.iter().map(|p| p.opened_at).collect();
        assert_eq!(times, vec![300, 120, 50]);
    }

    #[test]
    fn test_list_respects_display_limit() {
        let db = test_db();
        for i in 1..=4 {
            db.upsert_recent(&input(&format!("/tmp/repo-{i}"), i)).unwrap();
        }
        assert_eq!(db.list_recent(2).unwrap().len(), 2);
        // A smaller display limit must not shrink what is persisted.
        assert_eq!(db.list_recent(5).unwrap().len(), 4);
    }

    #[test]
    fn test_retention_after_every_upsert() {
        let db = test_db();
        for i in 1..=20 {
            db.upsert_recent(&input(&format!("/tmp/repo-{}", i % 8), i)).unwrap();
            let rows = db.list_recent(50).unwrap();
            assert!(rows.len() <= RETENTION_LIMIT);
            assert!(rows.windows(2).all(|w| w[0].opened_at >= w[1].opened_at));
        }
    }

    #[test]
    fn test_remove() {
        let db = test_db();
        db.upsert_recent(&input("/tmp/repo-a", 100)).unwrap();
        db.remove_recent("/tmp/repo-a").unwrap();
        assert!(db.list_recent(5).unwrap().is_empty());

        // Removing an absent path is not an error.
        db.remove_recent("/tmp/never-seen").unwrap();
    }

    #[test]
    fn test_meta_round_trip() {
        let db = test_db();
        assert_eq!(db.get_meta("last_project_path").unwrap(), None);

        db.set_meta("last_project_path", "/tmp/x").unwrap();
        assert_eq!(
            db.get_meta("last_project_path").unwrap(),
            Some("/tmp/x".to_string())
        );

        db.set_meta("last_project_path", "/tmp/y").unwrap();
        assert_eq!(
            db.get_meta("last_project_path").unwrap(),
            Some("/tmp/y".to_string())
        );
        assert_eq!(db.get_meta("missing").unwrap(), None);
    }
}
