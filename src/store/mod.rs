//! Persistence for workflows, keyed by workflow id.
//!
//! A save replaces the whole workflow under its id. Nothing is ever deleted.

pub mod json;
pub mod memory;
pub mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{ServerConfig, StoreKind};
use crate::model::Workflow;

pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

#[async_trait]
pub trait WorkflowStore: Send + Sync {
    /// All stored workflows, ordered by id.
    async fn list(&self) -> Result<Vec<Workflow>, StoreError>;

    async fn get(&self, id: &str) -> Result<Option<Workflow>, StoreError>;

    /// Store `workflow` under `id`, replacing whatever was there.
    async fn put(&self, id: &str, workflow: Workflow) -> Result<(), StoreError>;
}

/// Open the store backend selected by the configuration.
pub async fn open(config: &ServerConfig) -> Result<Arc<dyn WorkflowStore>, StoreError> {
    let store: Arc<dyn WorkflowStore> = match config.store {
        StoreKind::Json => Arc::new(JsonFileStore::open(config.data_path()).await?),
        StoreKind::Sqlite => Arc::new(SqliteStore::open(&config.data_path())?),
        StoreKind::Memory => Arc::new(MemoryStore::with_defaults()),
    };
    Ok(store)
}
