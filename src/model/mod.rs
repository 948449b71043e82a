pub mod edge;
pub mod node;
pub mod workflow;

pub use edge::WorkflowEdge;
pub use node::{NodeData, NodeId, NodeKind, WorkflowNode};
pub use workflow::Workflow;
