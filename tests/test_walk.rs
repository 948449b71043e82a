use tradeflow::defaults;
use tradeflow::engine::{self, WalkError, summary};
use tradeflow::model::{NodeKind, Workflow, WorkflowEdge, WorkflowNode};

// ── Helpers ─────────────────────────────────────────────────────────

fn workflow(nodes: Vec<WorkflowNode>, edges: Vec<WorkflowEdge>) -> Workflow {
    Workflow {
        id: "test".into(),
        name: "test".into(),
        description: None,
        nodes,
        edges,
    }
}

fn node(id: &str, kind: NodeKind) -> WorkflowNode {
    WorkflowNode::new(id, kind, format!("{id} label"))
}

fn edge(from: &str, to: &str) -> WorkflowEdge {
    WorkflowEdge::new(format!("{from}->{to}"), from, to)
}

fn visited(wf: &Workflow) -> Vec<String> {
    engine::walk(wf)
        .unwrap()
        .steps
        .into_iter()
        .map(|s| s.id)
        .collect()
}

// ── Concrete scenarios ──────────────────────────────────────────────

#[test]
fn full_chain_is_walked_in_order() {
    let wf = defaults::sol_dca_workflow();
    let result = engine::walk(&wf).unwrap();

    assert_eq!(result.workflow_id, "sol-dca-5m");
    assert!(!result.truncated_due_to_cycle);
    let ids: Vec<&str> = result.steps.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["timer-1", "condition-1", "order-1", "log-1"]);
    assert_eq!(result.steps[0].kind, NodeKind::Timer);
    assert_eq!(result.steps[0].label, "Every 5 minutes");
    assert_eq!(result.steps[3].kind, NodeKind::Output);
}

#[test]
fn removed_edge_ends_the_chain() {
    let mut wf = defaults::sol_dca_workflow();
    wf.edges.retain(|e| !(e.from == "order-1" && e.to == "log-1"));

    assert_eq!(visited(&wf), ["timer-1", "condition-1", "order-1"]);
}

#[test]
fn disconnected_nodes_start_at_first_zero_incoming() {
    let wf = workflow(
        vec![node("a", NodeKind::Condition), node("b", NodeKind::Order)],
        vec![],
    );

    assert_eq!(visited(&wf), ["a"]);
}

#[test]
fn two_node_cycle_without_timer_has_no_start() {
    let wf = workflow(
        vec![node("a", NodeKind::Condition), node("b", NodeKind::Order)],
        vec![edge("a", "b"), edge("b", "a")],
    );

    assert_eq!(engine::walk(&wf), Err(WalkError::NoStartNode));
    assert_eq!(engine::start_node(&wf).unwrap_err(), WalkError::NoStartNode);
}

#[test]
fn self_loop_timer_is_visited_once() {
    let wf = workflow(vec![node("a", NodeKind::Timer)], vec![edge("a", "a")]);
    let result = engine::walk(&wf).unwrap();

    assert_eq!(result.steps.len(), 1);
    assert_eq!(result.steps[0].id, "a");
    assert!(result.truncated_due_to_cycle);
}

// ── Start selection ─────────────────────────────────────────────────

#[test]
fn timer_wins_even_with_incoming_edges() {
    let wf = workflow(
        vec![
            node("src", NodeKind::Condition),
            node("t", NodeKind::Timer),
            node("out", NodeKind::Output),
        ],
        vec![edge("src", "t"), edge("t", "out")],
    );

    assert_eq!(visited(&wf), ["t", "out"]);
}

#[test]
fn first_timer_in_node_order_wins() {
    let wf = workflow(
        vec![
            node("o", NodeKind::Output),
            node("t2", NodeKind::Timer),
            node("t1", NodeKind::Timer),
        ],
        vec![],
    );

    assert_eq!(engine::start_node(&wf).unwrap().id, "t2");
}

#[test]
fn first_zero_incoming_in_node_order_wins() {
    let wf = workflow(
        vec![
            node("c", NodeKind::Condition),
            node("x", NodeKind::Order),
            node("y", NodeKind::Output),
        ],
        vec![edge("y", "c"), edge("x", "y")],
    );

    // c has an incoming edge, x is the first without one
    assert_eq!(visited(&wf), ["x", "y", "c"]);
}

#[test]
fn empty_workflow_has_no_start() {
    let wf = workflow(vec![], vec![]);
    assert_eq!(engine::walk(&wf), Err(WalkError::NoStartNode));
}

// ── Traversal ───────────────────────────────────────────────────────

#[test]
fn dangling_edge_stops_after_source() {
    let wf = workflow(
        vec![node("t", NodeKind::Timer), node("o", NodeKind::Output)],
        vec![edge("t", "ghost"), edge("ghost", "o")],
    );
    let result = engine::walk(&wf).unwrap();

    assert_eq!(result.steps.len(), 1);
    assert_eq!(result.steps[0].id, "t");
    assert!(!result.truncated_due_to_cycle);
}

#[test]
fn first_outgoing_edge_in_edge_order_is_followed() {
    let wf = workflow(
        vec![
            node("t", NodeKind::Timer),
            node("a", NodeKind::Order),
            node("b", NodeKind::Output),
        ],
        vec![edge("t", "b"), edge("t", "a"), edge("a", "b")],
    );

    assert_eq!(visited(&wf), ["t", "b"]);
}

#[test]
fn longer_cycle_returns_acyclic_prefix() {
    let wf = workflow(
        vec![
            node("t", NodeKind::Timer),
            node("a", NodeKind::Condition),
            node("b", NodeKind::Order),
        ],
        vec![edge("t", "a"), edge("a", "b"), edge("b", "a")],
    );
    let result = engine::walk(&wf).unwrap();

    let ids: Vec<&str> = result.steps.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["t", "a", "b"]);
    assert!(result.truncated_due_to_cycle);
}

#[test]
fn never_visits_more_nodes_than_exist() {
    let ids = ["t", "a", "b", "c", "d"];
    let nodes: Vec<_> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| node(id, if i == 0 { NodeKind::Timer } else { NodeKind::Order }))
        .collect();
    // every node points at every other node, in several orders
    let mut edges = Vec::new();
    for from in ids.iter().rev() {
        for to in ids {
            edges.push(edge(from, to));
        }
    }
    let wf = workflow(nodes, edges);
    let result = engine::walk(&wf).unwrap();

    assert!(result.steps.len() <= wf.nodes.len());
    let mut seen: Vec<&str> = result.steps.iter().map(|s| s.id.as_str()).collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), result.steps.len());
}

#[test]
fn walking_twice_gives_the_same_path() {
    let wf = defaults::sol_dca_workflow();
    assert_eq!(engine::walk(&wf), engine::walk(&wf));
}

#[test]
fn result_serializes_in_camel_case() {
    let result = engine::walk(&defaults::sol_dca_workflow()).unwrap();
    let v = serde_json::to_value(&result).unwrap();

    assert_eq!(v["workflowId"], "sol-dca-5m");
    assert_eq!(v["truncatedDueToCycle"], false);
    assert_eq!(v["steps"][0]["kind"], "timer");
    assert_eq!(v["steps"][2]["id"], "order-1");
}

#[test]
fn summary_matches_editor_report() {
    let result = engine::walk(&defaults::sol_dca_workflow()).unwrap();
    let text = summary::render(&result.steps);

    assert_eq!(
        text.lines().collect::<Vec<_>>(),
        [
            "1. [TIMER] Every 5 minutes (timer-1)",
            "2. [CONDITION] If market open (condition-1)",
            "3. [ORDER] Buy $10 SOL (order-1)",
            "4. [OUTPUT] Log fill (log-1)",
        ]
    );
}
