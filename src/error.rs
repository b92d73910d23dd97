//! 配置与事件输入的错误类型

use std::path::PathBuf;

use thiserror::Error;

/// 加载或编译配置时的错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 分类模式无法编译
    #[error("invalid {tier} pattern `{pattern}`: {source}")]
    InvalidPattern {
        tier: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// 读取事件时间线时的错误
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read events {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 整个文档不是 JSON 数组
    #[error("events must be a JSON array: {0}")]
    Json(#[from] serde_json::Error),
}
