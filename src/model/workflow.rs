use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::edge::WorkflowEdge;
use super::node::{NodeKind, WorkflowNode};

/// A named workflow: a directed graph of trading-automation nodes.
///
/// `nodes` and `edges` keep the order the editor produced. Lookups are by
/// id, but node order decides which node starts a walk and edge order
/// decides which outgoing edge a node follows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Workflow {
    /// Stable external key, e.g. "sol-dca-5m".
    pub id: String,
    /// Human-readable name for this workflow.
    pub name: String,
    /// Optional description of the automation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The nodes of the graph.
    pub nodes: Vec<WorkflowNode>,
    /// The directed edges connecting nodes.
    pub edges: Vec<WorkflowEdge>,
}

impl Workflow {
    pub fn has_kind(&self, kind: NodeKind) -> bool {
        self.nodes.iter().any(|n| n.kind == kind)
    }
}
