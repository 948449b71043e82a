use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::defaults;
use crate::model::Workflow;

use super::{StoreError, WorkflowStore};

/// Volatile store. Contents are lost when the process exits.
#[derive(Default)]
pub struct MemoryStore {
    workflows: RwLock<BTreeMap<String, Workflow>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        Self {
            workflows: RwLock::new(defaults::workflows()),
        }
    }
}

#[async_trait]
impl WorkflowStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Workflow>, StoreError> {
        Ok(self.workflows.read().await.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Workflow>, StoreError> {
        Ok(self.workflows.read().await.get(id).cloned())
    }

    async fn put(&self, id: &str, workflow: Workflow) -> Result<(), StoreError> {
        self.workflows.write().await.insert(id.to_string(), workflow);
        Ok(())
    }
}
