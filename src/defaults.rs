use std::collections::BTreeMap;

use crate::model::node::{
    ConditionData, NodeData, OrderAction, OrderData, OutputData, TimeUnit, TimerData,
};
use crate::model::{NodeKind, Workflow, WorkflowEdge, WorkflowNode};

/// ID of the workflow the editor opens on start.
pub const DEFAULT_WORKFLOW_ID: &str = "sol-dca-5m";

/// Buy a fixed amount of SOL every 5 minutes on a paper exchange.
pub fn sol_dca_workflow() -> Workflow {
    Workflow {
        id: DEFAULT_WORKFLOW_ID.into(),
        name: "SOL DCA every 5 minutes".into(),
        description: Some(
            "Simple workflow that buys a fixed amount of SOL every 5 minutes on a paper exchange."
                .into(),
        ),
        nodes: vec![
            WorkflowNode::new("timer-1", NodeKind::Timer, "Every 5 minutes")
                .at(260.0, 260.0)
                .with_data(NodeData::Timer(TimerData {
                    interval: "5".into(),
                    unit: TimeUnit::Minutes,
                })),
            WorkflowNode::new("condition-1", NodeKind::Condition, "If market open")
                .at(560.0, 260.0)
                .with_data(NodeData::Condition(ConditionData {
                    expression: "market.isOpen".into(),
                })),
            WorkflowNode::new("order-1", NodeKind::Order, "Buy $10 SOL")
                .at(860.0, 260.0)
                .with_data(NodeData::Order(OrderData {
                    asset: "SOL".into(),
                    action: OrderAction::Buy,
                    amount: 10.0,
                })),
            WorkflowNode::new("log-1", NodeKind::Output, "Log fill")
                .at(1160.0, 260.0)
                .with_data(NodeData::Output(OutputData {
                    message: "Order filled".into(),
                })),
        ],
        edges: vec![
            WorkflowEdge::new("edge-1", "timer-1", "condition-1"),
            WorkflowEdge::new("edge-2", "condition-1", "order-1"),
            WorkflowEdge::new("edge-3", "order-1", "log-1"),
        ],
    }
}

/// The dataset an empty or unreadable store starts from.
pub fn workflows() -> BTreeMap<String, Workflow> {
    let wf = sol_dca_workflow();
    BTreeMap::from([(wf.id.clone(), wf)])
}
