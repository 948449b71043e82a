use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension};
use tokio::sync::Mutex;
use tracing::info;

use crate::defaults;
use crate::model::Workflow;

use super::{StoreError, WorkflowStore};

/// Workflows stored as JSON text in a single SQLite table.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode = WAL;")?;
        info!(path = %path.display(), "opened workflow database");
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        migrate(&conn)?;
        seed_defaults(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

fn migrate(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS workflows (
            id            TEXT PRIMARY KEY,
            workflow_json TEXT NOT NULL,
            updated_at    INTEGER DEFAULT (unixepoch()),
            created_at    INTEGER DEFAULT (unixepoch())
        );
        ",
    )?;
    Ok(())
}

fn seed_defaults(conn: &Connection) -> Result<(), StoreError> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM workflows", [], |row| row.get(0))?;
    if count > 0 {
        return Ok(());
    }

    for (id, wf) in defaults::workflows() {
        let json = serde_json::to_string(&wf)?;
        conn.execute(
            "INSERT INTO workflows (id, workflow_json) VALUES (?1, ?2)",
            rusqlite::params![id, json],
        )?;
    }
    info!("seeded workflow database with defaults");
    Ok(())
}

#[async_trait]
impl WorkflowStore for SqliteStore {
    async fn list(&self) -> Result<Vec<Workflow>, StoreError> {
        let db = self.conn.lock().await;
        let mut stmt = db.prepare("SELECT workflow_json FROM workflows ORDER BY id")?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        rows.iter()
            .map(|json| serde_json::from_str(json).map_err(StoreError::from))
            .collect()
    }

    async fn get(&self, id: &str) -> Result<Option<Workflow>, StoreError> {
        let db = self.conn.lock().await;
        let json: Option<String> = db
            .query_row(
                "SELECT workflow_json FROM workflows WHERE id = ?1",
                [id],
                |row| row.get(0),
            )
            .optional()?;

        match json {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, id: &str, workflow: Workflow) -> Result<(), StoreError> {
        let json = serde_json::to_string(&workflow)?;
        let db = self.conn.lock().await;
        db.execute(
            "INSERT INTO workflows (id, workflow_json) VALUES (?1, ?2)
             ON CONFLICT(id) DO UPDATE SET workflow_json = excluded.workflow_json,
                                           updated_at = unixepoch()",
            rusqlite::params![id, json],
        )?;
        Ok(())
    }
}
