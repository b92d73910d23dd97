
use crate::flow::Event;
use chrono::{DateTime, TimeZone, Utc};

/// 以固定基准时间加毫秒偏移构造时间戳
pub(crate) fn at_ms(ms: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap() + chrono::Duration::milliseconds(ms)
}

pub(crate) fn ev(service: &str, ms: i64, message: &str) -> Event {
    Event::new(service, at_ms(ms), message)
}
