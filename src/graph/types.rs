use serde::{Deserialize, Serialize};

use crate::flow::HopStatus;

/// 画布坐标（节点左上角）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// `"node-" + service`
    pub id: String,
    pub service: String,
    pub status: HopStatus,
    pub event_count: usize,
    pub order: usize,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    /// 格式化后的时延，例如 `"500ms"` / `"1.50s"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// 交给渲染层的一次性图结构
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlowGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl FlowGraph {
    /// 为空时调用方应跳过渲染
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
