//! 图构建与布局
//!
//! 把 hop 列表转换为节点 + 有向边，并给出与渲染引擎无关的确定性二维坐标：
//! - **确定性**：同样的 hop 序列总是得到同样的坐标（便于快照测试）
//! - **轻量**：hop 列表本身就是一条路径，不需要力导向布局

mod build;
mod layout;
mod types;

pub use build::{build_graph, build_graph_default, edge_id, format_latency, node_id};
pub use layout::{LayoutOpts, wrap_grid_positions};
pub use types::{FlowGraph, GraphEdge, GraphNode, Position};
