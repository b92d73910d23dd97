//! 调用方使用的时间线摘要（不属于 flow 推导本身）

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::flow::Event;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimelineSummary {
    /// 所有传入事件，包括推导时被忽略的
    pub total_events: usize,
    pub first_seen: Option<DateTime<Utc>>,
    pub last_seen: Option<DateTime<Utc>>,
}

pub fn summarize(events: &[Event]) -> TimelineSummary {
    let mut timestamps = events.iter().filter_map(|ev| ev.timestamp);
    let first = timestamps.next();
    let (first_seen, last_seen) = timestamps.fold((first, first), |(lo, hi), t| {
        (lo.map(|lo| lo.min(t)), hi.map(|hi| hi.max(t)))
    });
    TimelineSummary {
        total_events: events.len(),
        first_seen,
        last_seen,
    }
}
