use tradeflow::defaults;

/// Print the default workflow JSON to stdout.
pub fn run() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&defaults::sol_dca_workflow())?;
    println!("{json}");
    Ok(())
}
