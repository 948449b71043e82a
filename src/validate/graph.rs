use std::collections::HashMap;

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::engine;
use crate::model::{NodeKind, Workflow};

use super::ValidationWarning;

/// Build a petgraph DiGraph from the workflow and report whether it has a
/// cycle. Self-loops count. Edges to unknown nodes are skipped; those are
/// reported by `references`.
pub fn check_cycles(workflow: &Workflow) -> Vec<ValidationWarning> {
    let mut graph = DiGraph::<&str, ()>::new();
    let mut index_map: HashMap<&str, NodeIndex> = HashMap::new();

    for node in &workflow.nodes {
        let id = node.id.as_str();
        index_map
            .entry(id)
            .or_insert_with(|| graph.add_node(id));
    }

    for edge in &workflow.edges {
        if let (Some(&from_idx), Some(&to_idx)) = (
            index_map.get(edge.from.as_str()),
            index_map.get(edge.to.as_str()),
        ) {
            graph.add_edge(from_idx, to_idx, ());
        }
    }

    if is_cyclic_directed(&graph) {
        vec![ValidationWarning::CycleDetected]
    } else {
        Vec::new()
    }
}

/// A runnable automation has a trigger, an output, and somewhere to start.
pub fn check_entry_and_exit(workflow: &Workflow) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if !workflow.has_kind(NodeKind::Timer) {
        warnings.push(ValidationWarning::NoTimer);
    }
    if !workflow.has_kind(NodeKind::Output) {
        warnings.push(ValidationWarning::NoOutput);
    }
    if engine::start_node(workflow).is_err() {
        warnings.push(ValidationWarning::NoStartNode);
    }

    warnings
}
