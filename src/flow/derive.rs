//! 事件时间线 → hop 列表

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Event, Hop, HopStatus, Latency, StatusClassifier};

/// 推导时如何确定事件顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HopOrdering {
    /// 按事件自身的时间戳稳定排序（同一时间戳保持输入顺序）
    #[default]
    Timestamp,
    /// 完全信任日志存储的返回顺序
    Arrival,
}

/// Flow 推导选项
#[derive(Debug, Clone, Default)]
pub struct FlowOpts {
    pub classifier: StatusClassifier,
    pub ordering: HopOrdering,
}

pub fn derive_flow_default(events: &[Event]) -> Vec<Hop> {
    derive_flow(events, &FlowOpts::default())
}

/// 把一个 correlation id 的事件折叠成按首次出现排序的 hop。
///
/// 同一服务再次出现时并入已有 hop 的计数，不会产生新 hop。
#[tracing::instrument(skip_all, fields(events = events.len(), ordering = ?opts.ordering))]
pub fn derive_flow(events: &[Event], opts: &FlowOpts) -> Vec<Hop> {
    let mut timeline: Vec<(&str, DateTime<Utc>, &str)> = events
        .iter()
        .filter_map(|ev| Some((ev.service_name()?, ev.timestamp?, ev.message_text())))
        .collect();

    let skipped = events.len() - timeline.len();
    if skipped > 0 {
        debug!(skipped, "忽略缺少 service 或 timestamp 的事件");
    }

    if opts.ordering == HopOrdering::Timestamp {
        // sort_by_key 是稳定排序
        timeline.sort_by_key(|&(_, ts, _)| ts);
    }

    let mut hops: Vec<Hop> = Vec::new();
    let mut messages: Vec<Vec<&str>> = Vec::new();
    let mut by_service: HashMap<&str, usize> = HashMap::new();

    for &(service, ts, msg) in &timeline {
        let idx = *by_service.entry(service).or_insert_with(|| {
            hops.push(Hop {
                order: hops.len() + 1,
                service: service.to_string(),
                first_timestamp: ts,
                event_count: 0,
                status: HopStatus::Ok,
                latency_to_next: None,
            });
            messages.push(Vec::new());
            hops.len() - 1
        });
        hops[idx].event_count += 1;
        messages[idx].push(msg);
    }

    for (hop, msgs) in hops.iter_mut().zip(&messages) {
        hop.status = opts.classifier.classify(msgs.iter().copied());
    }

    for i in 1..hops.len() {
        let next_first = hops[i].first_timestamp;
        let hop = &mut hops[i - 1];
        hop.latency_to_next = Some(Latency::between(hop.first_timestamp, next_first));
    }

    debug!(hops = hops.len(), counted = timeline.len(), "flow 推导完成");
    hops
}
