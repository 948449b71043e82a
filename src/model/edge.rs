use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::node::NodeId;

/// A directed connection from one node to the next.
///
/// `from` and `to` are expected to name nodes of the same workflow, but a
/// dangling reference is tolerated: the walker simply stops there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WorkflowEdge {
    /// Edge ID, e.g. "edge-1".
    pub id: String,
    /// Source node ID.
    pub from: NodeId,
    /// Destination node ID.
    pub to: NodeId,
}

impl WorkflowEdge {
    pub fn new(id: impl Into<String>, from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}
