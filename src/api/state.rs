use std::sync::Arc;

use crate::store::WorkflowStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn WorkflowStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn WorkflowStore>) -> Self {
        Self { store }
    }
}
