pub mod summary;
pub mod walk;

use std::path::Path;

use anyhow::{Context, Result};

use crate::model::workflow::Workflow;

pub use walk::{ExecutionResult, Step, WalkError, start_node, walk};

/// CLI entry point for the `walk` subcommand.
pub fn run(path: &Path, json: bool) -> Result<()> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let workflow: Workflow = serde_json::from_str(&contents)
        .with_context(|| format!("parsing workflow {}", path.display()))?;

    let result = walk(&workflow).with_context(|| format!("walking workflow '{}'", workflow.id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Execution path for '{}':", workflow.name);
        println!();
        println!("{}", summary::render(&result.steps));
        if result.truncated_due_to_cycle {
            println!();
            println!("(stopped at a cycle)");
        }
    }
    Ok(())
}
