//! 输入日志事件

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// 一条日志事件（由日志查询方提供，已按 correlation id 过滤）。
///
/// 所有字段都可能缺失：缺少 `service` 或 `timestamp` 的事件在推导时被忽略，
/// 缺少 `message` 视为空串。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub service: Option<String>,
    /// ISO-8601 字符串（无偏移时按 UTC）或 Unix epoch 秒/毫秒；无法解析时视为缺失
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
}

impl Event {
    pub fn new(service: impl Into<String>, timestamp: DateTime<Utc>, message: impl Into<String>) -> Self {
        Self {
            service: Some(service.into()),
            timestamp: Some(timestamp),
            message: Some(message.into()),
            correlation_id: None,
        }
    }

    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// 去掉首尾空白后的服务名；为空时返回 `None`。
    pub fn service_name(&self) -> Option<&str> {
        self.service
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn message_text(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }
}

/// 小于该值的 epoch 数字按秒解释，否则按毫秒解释
const EPOCH_MILLIS_THRESHOLD: i64 = 100_000_000_000;

/// 不带时区偏移的 ISO-8601 格式，按 UTC 处理
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Integer(i64),
    Float(f64),
    Text(String),
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawTimestamp>::deserialize(deserializer)?;
    let parsed = match &raw {
        None => return Ok(None),
        Some(RawTimestamp::Integer(n)) => from_epoch_integer(*n),
        Some(RawTimestamp::Float(f)) => from_epoch_float(*f),
        Some(RawTimestamp::Text(s)) => parse_timestamp_text(s),
    };
    if parsed.is_none() {
        let shown = match &raw {
            Some(RawTimestamp::Integer(n)) => n.to_string(),
            Some(RawTimestamp::Float(f)) => f.to_string(),
            Some(RawTimestamp::Text(s)) => s.clone(),
            None => String::new(),
        };
        warn!(timestamp = %shown, "无法解析时间戳，该事件将被忽略");
    }
    Ok(parsed)
}

fn from_epoch_integer(n: i64) -> Option<DateTime<Utc>> {
    if n.unsigned_abs() < EPOCH_MILLIS_THRESHOLD as u64 {
        DateTime::<Utc>::from_timestamp(n, 0)
    } else {
        DateTime::<Utc>::from_timestamp_millis(n)
    }
}

/// 小数 epoch 只保留到微秒
fn from_epoch_float(f: f64) -> Option<DateTime<Utc>> {
    if !f.is_finite() {
        return None;
    }
    let secs = if f.abs() < EPOCH_MILLIS_THRESHOLD as f64 {
        f
    } else {
        f / 1_000.0
    };
    let whole = secs.floor();
    if whole < i64::MIN as f64 || whole > i64::MAX as f64 {
        return None;
    }
    let micros = ((secs - whole) * 1_000_000.0).round() as i64;
    DateTime::<Utc>::from_timestamp(whole as i64, 0)
        .and_then(|t| t.checked_add_signed(TimeDelta::microseconds(micros)))
}

fn parse_timestamp_text(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    if let Ok(t) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(t.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}
