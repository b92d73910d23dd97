use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Latency;

/// hop 的健康状态（按严重程度排序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HopStatus {
    #[default]
    Ok,
    Warn,
    Error,
}

/// 一个服务在请求时间线中的参与，按首次出现排序。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hop {
    /// 从 1 开始，连续且唯一
    pub order: usize,
    pub service: String,
    pub first_timestamp: DateTime<Utc>,
    pub event_count: usize,
    pub status: HopStatus,
    /// 到下一跳首次出现的时延；最后一跳为 `None`
    #[serde(rename = "latency_to_next_ns", skip_serializing_if = "Option::is_none", default)]
    pub latency_to_next: Option<Latency>,
}
