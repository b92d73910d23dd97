//! hop 列表 → 节点/边

use tracing::debug;

use super::{FlowGraph, GraphEdge, GraphNode, LayoutOpts, wrap_grid_positions};
use crate::flow::{Hop, Latency};

pub fn node_id(service: &str) -> String {
    format!("node-{service}")
}

pub fn edge_id(source_service: &str, target_service: &str) -> String {
    format!("edge-{source_service}-{target_service}")
}

/// 1 秒以下显示整毫秒（截断），否则显示两位小数的秒。
pub fn format_latency(latency: Latency) -> String {
    if latency < Latency::from_secs(1) {
        format!("{}ms", latency.as_millis())
    } else {
        format!("{:.2}s", latency.as_secs_f64())
    }
}

pub fn build_graph_default(hops: &[Hop]) -> FlowGraph {
    build_graph(hops, &LayoutOpts::default())
}

/// 每个 hop 一个节点，每对相邻 hop 一条边。
///
/// 节点 id 由服务名派生；不同服务派生出相同 id 属于上游数据问题，这里不去重。
#[tracing::instrument(skip_all, fields(hops = hops.len()))]
pub fn build_graph(hops: &[Hop], layout: &LayoutOpts) -> FlowGraph {
    if hops.is_empty() {
        return FlowGraph::default();
    }

    let positions = wrap_grid_positions(hops.len(), layout);
    let nodes = hops
        .iter()
        .zip(positions)
        .map(|(hop, position)| GraphNode {
            id: node_id(&hop.service),
            service: hop.service.clone(),
            status: hop.status,
            event_count: hop.event_count,
            order: hop.order,
            position,
        })
        .collect::<Vec<_>>();

    let edges = hops
        .windows(2)
        .map(|pair| GraphEdge {
            id: edge_id(&pair[0].service, &pair[1].service),
            source: node_id(&pair[0].service),
            target: node_id(&pair[1].service),
            label: pair[0].latency_to_next.map(format_latency),
        })
        .collect::<Vec<_>>();

    debug!(nodes = nodes.len(), edges = edges.len(), "图构建完成");
    FlowGraph { nodes, edges }
}
