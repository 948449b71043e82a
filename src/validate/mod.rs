mod graph;
mod references;

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::model::Workflow;

/// Problems that make a workflow unfit to store.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Workflow id must not be empty")]
    EmptyWorkflowId,

    #[error("Duplicate node ID `{node_id}`")]
    DuplicateNodeId { node_id: String },

    #[error("Node `{node_id}` is a {kind} node but carries {data_kind} parameters")]
    DataKindMismatch {
        node_id: String,
        kind: String,
        data_kind: String,
    },
}

/// Problems that are tolerated but worth reporting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationWarning {
    #[error("Edge `{edge_id}` references unknown node `{node_id}`")]
    UnknownNode { edge_id: String, node_id: String },

    #[error("Node `{node_id}` has {count} outgoing edges; only `{followed}` is followed")]
    MultipleOutgoing {
        node_id: String,
        count: usize,
        followed: String,
    },

    #[error("Workflow contains a cycle")]
    CycleDetected,

    #[error("Workflow has no timer node")]
    NoTimer,

    #[error("Workflow has no output node")]
    NoOutput,

    #[error("Workflow has no start node (no timer and no node without incoming edges)")]
    NoStartNode,
}

/// Everything the validator found, as display strings.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Load a workflow from a JSON file and reject it if it has errors.
pub fn load_and_validate(path: &Path) -> Result<Workflow, Vec<ValidationError>> {
    let contents = std::fs::read_to_string(path).map_err(|e| vec![ValidationError::Io(e)])?;
    let workflow: Workflow =
        serde_json::from_str(&contents).map_err(|e| vec![ValidationError::Json(e)])?;
    validate(&workflow)?;
    Ok(workflow)
}

/// Validate a workflow, collecting all errors.
pub fn validate(workflow: &Workflow) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    errors.extend(references::check_workflow_id(workflow));
    errors.extend(references::check_duplicate_ids(workflow));
    errors.extend(references::check_node_data(workflow));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Collect the tolerated problems of a workflow.
pub fn warnings(workflow: &Workflow) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    warnings.extend(references::check_edge_references(workflow));
    warnings.extend(references::check_fan_out(workflow));
    warnings.extend(graph::check_cycles(workflow));
    warnings.extend(graph::check_entry_and_exit(workflow));

    warnings
}

/// Errors and warnings together.
pub fn report(workflow: &Workflow) -> Report {
    let errors: Vec<String> = match validate(workflow) {
        Ok(()) => Vec::new(),
        Err(errs) => errs.iter().map(ToString::to_string).collect(),
    };
    let warnings = warnings(workflow).iter().map(ToString::to_string).collect();

    Report {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}

/// CLI entry point for the `validate` subcommand.
pub fn run(path: &Path) -> anyhow::Result<()> {
    match load_and_validate(path) {
        Ok(wf) => {
            println!(
                "Workflow '{}' is valid. {} nodes, {} edges.",
                wf.name,
                wf.nodes.len(),
                wf.edges.len()
            );
            let warns = warnings(&wf);
            if !warns.is_empty() {
                println!("{} warning(s):", warns.len());
                for (i, w) in warns.iter().enumerate() {
                    println!("  {}. {}", i + 1, w);
                }
            }
            Ok(())
        }
        Err(errors) => {
            eprintln!("Validation failed with {} error(s):", errors.len());
            for (i, e) in errors.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, e);
            }
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;
    use crate::model::{NodeData, NodeKind, WorkflowEdge, WorkflowNode};

    #[test]
    fn default_workflow_is_clean() {
        let wf = defaults::sol_dca_workflow();
        assert!(validate(&wf).is_ok());
        assert!(warnings(&wf).is_empty());
        let r = report(&wf);
        assert!(r.valid);
    }

    #[test]
    fn errors_are_collected() {
        let mut wf = defaults::sol_dca_workflow();
        wf.id = String::new();
        wf.nodes.push(WorkflowNode::new("timer-1", NodeKind::Timer, "again"));
        wf.nodes[1].data = Some(NodeData::default_for(NodeKind::Order));

        let errs = validate(&wf).unwrap_err();
        assert_eq!(errs.len(), 3);
        assert!(matches!(errs[0], ValidationError::EmptyWorkflowId));
        assert!(matches!(&errs[1], ValidationError::DuplicateNodeId { node_id } if node_id == "timer-1"));
        assert!(matches!(&errs[2], ValidationError::DataKindMismatch { node_id, .. } if node_id == "condition-1"));
    }

    #[test]
    fn dangling_and_fan_out_edges_only_warn() {
        let mut wf = defaults::sol_dca_workflow();
        wf.edges.push(WorkflowEdge::new("edge-4", "log-1", "ghost"));
        wf.edges.push(WorkflowEdge::new("edge-5", "timer-1", "log-1"));

        assert!(validate(&wf).is_ok());
        let warns = warnings(&wf);
        assert!(warns.contains(&ValidationWarning::UnknownNode {
            edge_id: "edge-4".into(),
            node_id: "ghost".into(),
        }));
        assert!(warns.contains(&ValidationWarning::MultipleOutgoing {
            node_id: "timer-1".into(),
            count: 2,
            followed: "edge-1".into(),
        }));
    }

    #[test]
    fn cycle_without_timer_warns_about_start() {
        let wf = Workflow {
            id: "loop".into(),
            name: "loop".into(),
            description: None,
            nodes: vec![
                WorkflowNode::new("a", NodeKind::Condition, "A"),
                WorkflowNode::new("b", NodeKind::Output, "B"),
            ],
            edges: vec![
                WorkflowEdge::new("e1", "a", "b"),
                WorkflowEdge::new("e2", "b", "a"),
            ],
        };
        let warns = warnings(&wf);
        assert!(warns.contains(&ValidationWarning::CycleDetected));
        assert!(warns.contains(&ValidationWarning::NoTimer));
        assert!(warns.contains(&ValidationWarning::NoStartNode));
        assert!(!warns.contains(&ValidationWarning::NoOutput));
    }
}
