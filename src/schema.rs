use schemars::schema_for;

use crate::model::Workflow;

/// JSON Schema for `Workflow`.
pub fn workflow_schema() -> serde_json::Value {
    serde_json::to_value(schema_for!(Workflow)).unwrap_or_default()
}

/// Generate and print the JSON Schema for `Workflow`.
pub fn run() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&schema_for!(Workflow))?;
    println!("{json}");
    Ok(())
}
