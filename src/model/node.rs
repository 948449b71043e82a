use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A unique identifier for a node within a workflow.
pub type NodeId = String;

// ── Kinds ───────────────────────────────────────────────────────────

/// What a node does in the automation. Determines the valid `data` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Periodic trigger; the preferred start of a walk.
    Timer,
    /// Gate on a market expression.
    Condition,
    /// Place a buy or sell order.
    Order,
    /// Emit a log message.
    Output,
}

impl NodeKind {
    pub const ALL: [NodeKind; 4] = [
        NodeKind::Timer,
        NodeKind::Condition,
        NodeKind::Order,
        NodeKind::Output,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Timer => "timer",
            NodeKind::Condition => "condition",
            NodeKind::Order => "order",
            NodeKind::Output => "output",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Parameter enums ─────────────────────────────────────────────────

/// Unit of a timer interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum TimeUnit {
    #[serde(rename = "m")]
    Minutes,
    #[serde(rename = "h")]
    Hours,
}

/// Order side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderAction {
    Buy,
    Sell,
}

// ── Per-kind parameters ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TimerData {
    /// Interval length as entered in the editor, e.g. "5".
    pub interval: String,
    pub unit: TimeUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConditionData {
    /// Free-form expression, e.g. "price > 100". Never evaluated.
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OrderData {
    /// Asset symbol, e.g. "SOL".
    pub asset: String,
    pub action: OrderAction,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OutputData {
    pub message: String,
}

/// The editor's `{}` placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct EmptyData {}

/// Kind-specific node parameters.
///
/// The wire format carries no tag, so the variant is recognised by its
/// fields. Whether it agrees with the node's `kind` is checked by the
/// validator, not by deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum NodeData {
    Timer(TimerData),
    Condition(ConditionData),
    Order(OrderData),
    Output(OutputData),
    Empty(EmptyData),
}

impl NodeData {
    /// The kind this parameter shape belongs to. `None` for `{}`.
    pub fn kind(&self) -> Option<NodeKind> {
        match self {
            NodeData::Timer(_) => Some(NodeKind::Timer),
            NodeData::Condition(_) => Some(NodeKind::Condition),
            NodeData::Order(_) => Some(NodeKind::Order),
            NodeData::Output(_) => Some(NodeKind::Output),
            NodeData::Empty(_) => None,
        }
    }

    /// Parameters the editor assigns to a freshly placed node.
    pub fn default_for(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Timer => NodeData::Timer(TimerData {
                interval: "5".into(),
                unit: TimeUnit::Minutes,
            }),
            NodeKind::Condition => NodeData::Condition(ConditionData {
                expression: "price > 0".into(),
            }),
            NodeKind::Order => NodeData::Order(OrderData {
                asset: "SOL".into(),
                action: OrderAction::Buy,
                amount: 1.0,
            }),
            NodeKind::Output => NodeData::Output(OutputData {
                message: "Log message".into(),
            }),
        }
    }
}

// ── Node ────────────────────────────────────────────────────────────

/// A node placed on the editor canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(from = "StoredNode")]
pub struct WorkflowNode {
    /// Unique ID within the workflow, e.g. "timer-1".
    pub id: NodeId,
    pub kind: NodeKind,
    /// Display name, e.g. "Every 5 minutes".
    pub label: String,
    /// Canvas position. Layout only; ignored by the walker.
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<NodeData>,
}

/// Canvas position as older data files nest it: `"position": {"x", "y"}`.
#[derive(Debug, Clone, Copy, Default, Deserialize, JsonSchema)]
struct Position {
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
}

/// Input form of a node. Accepts flat `x`/`y` or a nested `position`;
/// flat coordinates win when both are present.
#[derive(Deserialize, JsonSchema)]
struct StoredNode {
    id: NodeId,
    kind: NodeKind,
    label: String,
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
    #[serde(default)]
    position: Option<Position>,
    #[serde(default)]
    data: Option<NodeData>,
}

impl From<StoredNode> for WorkflowNode {
    fn from(raw: StoredNode) -> Self {
        let pos = raw.position.unwrap_or_default();
        Self {
            id: raw.id,
            kind: raw.kind,
            label: raw.label,
            x: raw.x.unwrap_or(pos.x),
            y: raw.y.unwrap_or(pos.y),
            data: raw.data,
        }
    }
}

impl WorkflowNode {
    pub fn new(id: impl Into<NodeId>, kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            x: 0.0,
            y: 0.0,
            data: None,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_data(mut self, data: NodeData) -> Self {
        self.data = Some(data);
        self
    }

    /// Whether `data` is absent, empty, or of this node's kind.
    pub fn data_matches_kind(&self) -> bool {
        match self.data.as_ref().and_then(NodeData::kind) {
            Some(kind) => kind == self.kind,
            None => true,
        }
    }
}
