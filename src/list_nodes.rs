use tradeflow::model::{NodeData, NodeKind};

fn describe(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Timer => {
            "Periodic trigger. A walk starts at the first timer node.
   Parameters:
     - interval: String  (e.g. \"5\")
     - unit:     \"m\" | \"h\""
        }
        NodeKind::Condition => {
            "Gate on a market expression. The expression is recorded, never evaluated.
   Parameters:
     - expression: String  (e.g. \"price > 100\")"
        }
        NodeKind::Order => {
            "Place an order on a paper exchange. Nothing is sent anywhere.
   Parameters:
     - asset:  String         (e.g. \"SOL\")
     - action: \"buy\" | \"sell\"
     - amount: f64"
        }
        NodeKind::Output => {
            "Emit a log message.
   Parameters:
     - message: String"
        }
    }
}

/// Print a human-readable listing of all node kinds and their parameters.
pub fn run() -> anyhow::Result<()> {
    println!("Available Node Kinds");
    println!("====================");
    println!();
    println!("Every node has: id (unique), kind, label, x, y, and optional data.");
    println!("The shape of data must match the kind; {{}} is accepted as \"no parameters\".");

    for (i, kind) in NodeKind::ALL.into_iter().enumerate() {
        let default = serde_json::to_string(&NodeData::default_for(kind))?;
        println!();
        println!("{}. {}", i + 1, kind);
        println!("   {}", describe(kind));
        println!("   Default: {default}");
    }

    println!();
    println!("Edges: {{id, from, to}}. A node follows its first outgoing edge in edge order.");
    Ok(())
}
