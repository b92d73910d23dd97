//! 事件时间线读取
//!
//! 单条事件格式错误时跳过并记录警告，只有整个文档无法解析时才报错。

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::InputError;
use crate::flow::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFormat {
    /// 顶层 JSON 数组
    Json,
    /// 每行一个 JSON 对象
    JsonLines,
}

impl EventFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("jsonl" | "ndjson") => EventFormat::JsonLines,
            _ => EventFormat::Json,
        }
    }
}

pub fn parse_events(raw: &str, format: EventFormat) -> Result<Vec<Event>, InputError> {
    match format {
        EventFormat::Json => {
            let values: Vec<serde_json::Value> = serde_json::from_str(raw)?;
            Ok(values
                .into_iter()
                .enumerate()
                .filter_map(|(idx, v)| match serde_json::from_value::<Event>(v) {
                    Ok(ev) => Some(ev),
                    Err(err) => {
                        warn!(index = idx, %err, "跳过无法解析的事件");
                        None
                    }
                })
                .collect())
        }
        EventFormat::JsonLines => Ok(raw
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(idx, line)| match serde_json::from_str::<Event>(line) {
                Ok(ev) => Some(ev),
                Err(err) => {
                    warn!(line = idx + 1, %err, "跳过无法解析的事件");
                    None
                }
            })
            .collect()),
    }
}

pub fn load_events(path: &Path) -> Result<Vec<Event>, InputError> {
    let raw = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_events(&raw, EventFormat::from_path(path))
}

/// 只保留 `correlation_id` 等于 `id` 的事件
pub fn filter_correlation(events: Vec<Event>, id: &str) -> Vec<Event> {
    events
        .into_iter()
        .filter(|ev| ev.correlation_id.as_deref() == Some(id))
        .collect()
}
