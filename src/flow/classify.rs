//! 基于消息文本的 hop 状态分类
//!
//! 两级模式匹配（大小写不敏感）：错误级优先于降级级，
//! 只要任意一条消息命中错误模式，hop 即为 `error`。

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::HopStatus;
use crate::error::ConfigError;

/// 可配置的分类模式（regex 语法）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub error_patterns: Vec<String>,
    pub warn_patterns: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            error_patterns: vec![
                "error".to_string(),
                "fail".to_string(),
                "exception".to_string(),
                // 状态上下文中的 HTTP 4xx/5xx，例如 `status=503`、`HTTP/1.1" 404`、`-> 500`
                r"(?:\b(?:status|code|http(?:/\d(?:\.\d)?)?|returned|responded)|->)\W{0,3}[45]\d{2}\b"
                    .to_string(),
                // 带原因短语的状态码，例如 `502 Bad Gateway`
                r"\b[45]\d{2}\s+(?:bad request|unauthorized|forbidden|not found|conflict|too many requests|internal server error|bad gateway|service unavailable|gateway timeout)"
                    .to_string(),
            ],
            warn_patterns: vec![
                "warn".to_string(),
                "timeout".to_string(),
                "retry".to_string(),
            ],
        }
    }
}

impl ClassifierConfig {
    pub fn compile(&self) -> Result<StatusClassifier, ConfigError> {
        Ok(StatusClassifier {
            error: compile_tier("error", &self.error_patterns)?,
            warn: compile_tier("warn", &self.warn_patterns)?,
        })
    }
}

fn compile_tier(tier: &'static str, patterns: &[String]) -> Result<Vec<Regex>, ConfigError> {
    patterns
        .iter()
        .map(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .map_err(|source| ConfigError::InvalidPattern {
                    tier,
                    pattern: p.clone(),
                    source,
                })
        })
        .collect()
}

/// 编译好的分类器，可跨线程共享
#[derive(Debug, Clone)]
pub struct StatusClassifier {
    error: Vec<Regex>,
    warn: Vec<Regex>,
}

impl Default for StatusClassifier {
    fn default() -> Self {
        ClassifierConfig::default()
            .compile()
            .expect("built-in classifier patterns must compile")
    }
}

impl StatusClassifier {
    pub fn classify_message(&self, message: &str) -> HopStatus {
        if self.error.iter().any(|re| re.is_match(message)) {
            HopStatus::Error
        } else if self.warn.iter().any(|re| re.is_match(message)) {
            HopStatus::Warn
        } else {
            HopStatus::Ok
        }
    }

    /// 一个 hop 的所有消息的综合状态
    pub fn classify<'a, I>(&self, messages: I) -> HopStatus
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut status = HopStatus::Ok;
        for msg in messages {
            match self.classify_message(msg) {
                HopStatus::Error => {
                    trace!(message = msg, "命中错误模式");
                    return HopStatus::Error;
                }
                s => status = status.max(s),
            }
        }
        status
    }
}
