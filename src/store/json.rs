use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::defaults;
use crate::model::Workflow;

use super::{StoreError, WorkflowStore};

/// Workflows kept in memory and mirrored to one JSON file holding the
/// `{id: workflow}` map.
///
/// Every save rewrites the whole file. The write lock is held from the
/// in-memory update until the file is replaced, so concurrent saves are
/// applied one after another and none is lost.
pub struct JsonFileStore {
    path: PathBuf,
    workflows: RwLock<BTreeMap<String, Workflow>>,
}

impl JsonFileStore {
    /// Load the file at `path`. A missing or unreadable file falls back to
    /// the default dataset; the file is only written on the first save.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let workflows = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => match serde_json::from_str::<BTreeMap<String, Workflow>>(&contents) {
                Ok(map) => map,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "data file is not valid, using defaults");
                    defaults::workflows()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "no existing data file found, using defaults");
                defaults::workflows()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read data file, using defaults");
                defaults::workflows()
            }
        };

        info!(count = workflows.len(), "loaded workflows");

        Ok(Self {
            path,
            workflows: RwLock::new(workflows),
        })
    }

    async fn persist(&self, workflows: &BTreeMap<String, Workflow>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(workflows)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl WorkflowStore for JsonFileStore {
    async fn list(&self) -> Result<Vec<Workflow>, StoreError> {
        Ok(self.workflows.read().await.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Workflow>, StoreError> {
        Ok(self.workflows.read().await.get(id).cloned())
    }

    async fn put(&self, id: &str, workflow: Workflow) -> Result<(), StoreError> {
        let mut guard = self.workflows.write().await;

        let mut next = guard.clone();
        next.insert(id.to_string(), workflow);

        if let Err(e) = self.persist(&next).await {
            warn!(path = %self.path.display(), error = %e, "failed to save workflows");
            return Err(e);
        }

        *guard = next;
        Ok(())
    }
}
