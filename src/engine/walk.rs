use std::collections::{HashMap, HashSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::node::{NodeKind, WorkflowNode};
use crate::model::workflow::Workflow;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    /// No timer node and every node has at least one incoming edge.
    #[error("Cannot find a start node")]
    NoStartNode,
}

/// One visited node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Step {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
}

impl From<&WorkflowNode> for Step {
    fn from(node: &WorkflowNode) -> Self {
        Self {
            id: node.id.clone(),
            kind: node.kind,
            label: node.label.clone(),
        }
    }
}

/// The execution path of a workflow, in traversal order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    pub workflow_id: String,
    pub steps: Vec<Step>,
    /// Set when the walk ended by re-entering an already visited node.
    /// A dead end or a dangling edge leaves it unset.
    #[serde(default)]
    pub truncated_due_to_cycle: bool,
}

/// Adjacency view used by the walker.
///
/// A node with several outgoing edges follows the first one in edge order.
struct Links<'a> {
    outgoing: HashMap<&'a str, &'a str>,
    incoming: HashMap<&'a str, usize>,
    by_id: HashMap<&'a str, &'a WorkflowNode>,
}

impl<'a> Links<'a> {
    fn new(workflow: &'a Workflow) -> Self {
        let mut outgoing = HashMap::new();
        let mut incoming: HashMap<&str, usize> = HashMap::new();
        let mut by_id = HashMap::new();

        for node in &workflow.nodes {
            incoming.insert(node.id.as_str(), 0);
            // duplicate ids resolve to the first node, like a linear scan would
            by_id.entry(node.id.as_str()).or_insert(node);
        }

        for edge in &workflow.edges {
            outgoing.entry(edge.from.as_str()).or_insert(edge.to.as_str());
            *incoming.entry(edge.to.as_str()).or_insert(0) += 1;
        }

        Self {
            outgoing,
            incoming,
            by_id,
        }
    }

    fn incoming_count(&self, id: &str) -> usize {
        self.incoming.get(id).copied().unwrap_or(0)
    }

    fn next(&self, id: &str) -> Option<&'a WorkflowNode> {
        let target = self.outgoing.get(id)?;
        self.by_id.get(target).copied()
    }
}

/// Pick the node a walk starts from: the first timer in node order, else the
/// first node with no incoming edges.
pub fn start_node(workflow: &Workflow) -> Result<&WorkflowNode, WalkError> {
    let links = Links::new(workflow);
    find_start(workflow, &links)
}

fn find_start<'a>(workflow: &'a Workflow, links: &Links<'_>) -> Result<&'a WorkflowNode, WalkError> {
    workflow
        .nodes
        .iter()
        .find(|n| n.kind == NodeKind::Timer)
        .or_else(|| {
            workflow
                .nodes
                .iter()
                .find(|n| links.incoming_count(&n.id) == 0)
        })
        .ok_or(WalkError::NoStartNode)
}

/// Walk the workflow from its start node, following one outgoing edge per
/// node until a dead end, a dangling edge, or a revisit.
///
/// No node is interpreted; the result only records which nodes would run
/// and in what order. Each node appears at most once.
pub fn walk(workflow: &Workflow) -> Result<ExecutionResult, WalkError> {
    let links = Links::new(workflow);
    let start = find_start(workflow, &links)?;

    let mut visited: HashSet<&str> = HashSet::new();
    let mut steps = Vec::new();
    let mut truncated_due_to_cycle = false;

    let mut current = Some(start);
    while let Some(node) = current {
        if !visited.insert(node.id.as_str()) {
            truncated_due_to_cycle = true;
            break;
        }
        steps.push(Step::from(node));
        current = links.next(&node.id);
    }

    Ok(ExecutionResult {
        workflow_id: workflow.id.clone(),
        steps,
        truncated_due_to_cycle,
    })
}
