//! 时延类型
//!
//! 定义 hop 之间的时延及其单位转换。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 时延（纳秒），永不为负。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Latency(pub u64);

impl Latency {
    pub const ZERO: Latency = Latency(0);

    pub fn from_micros(us: u64) -> Latency {
        Latency(us.saturating_mul(1_000))
    }
    pub fn from_millis(ms: u64) -> Latency {
        Latency(ms.saturating_mul(1_000_000))
    }
    pub fn from_secs(s: u64) -> Latency {
        Latency(s.saturating_mul(1_000_000_000))
    }

    /// `later - earlier`，时钟偏移导致的负值截断为零。
    pub fn between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> Latency {
        if later <= earlier {
            return Latency::ZERO;
        }
        match (later - earlier).num_nanoseconds() {
            Some(ns) => Latency(u64::try_from(ns).unwrap_or(0)),
            // 超出 i64 纳秒范围（约 292 年）
            None => Latency(u64::MAX),
        }
    }

    /// 整毫秒（截断）
    pub fn as_millis(self) -> u64 {
        self.0 / 1_000_000
    }

    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1_000_000_000.0
    }
}
