use std::collections::{HashMap, HashSet};

use crate::model::Workflow;

use super::{ValidationError, ValidationWarning};

pub fn check_workflow_id(workflow: &Workflow) -> Vec<ValidationError> {
    if workflow.id.trim().is_empty() {
        vec![ValidationError::EmptyWorkflowId]
    } else {
        Vec::new()
    }
}

/// Check that all node IDs are unique.
pub fn check_duplicate_ids(workflow: &Workflow) -> Vec<ValidationError> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for node in &workflow.nodes {
        if !seen.insert(node.id.as_str()) {
            errors.push(ValidationError::DuplicateNodeId {
                node_id: node.id.clone(),
            });
        }
    }

    errors
}

/// Check that each node's parameters belong to its kind.
pub fn check_node_data(workflow: &Workflow) -> Vec<ValidationError> {
    workflow
        .nodes
        .iter()
        .filter(|n| !n.data_matches_kind())
        .filter_map(|n| {
            let data_kind = n.data.as_ref()?.kind()?;
            Some(ValidationError::DataKindMismatch {
                node_id: n.id.clone(),
                kind: n.kind.to_string(),
                data_kind: data_kind.to_string(),
            })
        })
        .collect()
}

/// Report edges whose endpoints do not exist.
pub fn check_edge_references(workflow: &Workflow) -> Vec<ValidationWarning> {
    let node_ids: HashSet<&str> = workflow.nodes.iter().map(|n| n.id.as_str()).collect();
    let mut warnings = Vec::new();

    for edge in &workflow.edges {
        for endpoint in [&edge.from, &edge.to] {
            if !node_ids.contains(endpoint.as_str()) {
                warnings.push(ValidationWarning::UnknownNode {
                    edge_id: edge.id.clone(),
                    node_id: endpoint.clone(),
                });
            }
        }
    }

    warnings
}

/// Report nodes with more than one outgoing edge, naming the edge the
/// walker follows.
pub fn check_fan_out(workflow: &Workflow) -> Vec<ValidationWarning> {
    let mut counts: HashMap<&str, (usize, &str)> = HashMap::new();
    let mut order = Vec::new();

    for edge in &workflow.edges {
        let entry = counts.entry(edge.from.as_str()).or_insert_with(|| {
            order.push(edge.from.as_str());
            (0, edge.id.as_str())
        });
        entry.0 += 1;
    }

    order
        .into_iter()
        .filter_map(|from| {
            let (count, followed) = counts[from];
            (count > 1).then(|| ValidationWarning::MultipleOutgoing {
                node_id: from.to_string(),
                count,
                followed: followed.to_string(),
            })
        })
        .collect()
}
