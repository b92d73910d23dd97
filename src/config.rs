//! 运行配置（JSON）
//!
//! 所有字段都有默认值，配置文件可以只写需要覆盖的部分：
//!
//! ```json
//! { "classifier": { "warn_patterns": ["slow"] }, "layout": { "max_row_width": 800 } }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::flow::{ClassifierConfig, FlowOpts, HopOrdering};
use crate::graph::LayoutOpts;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TopoConfig {
    pub classifier: ClassifierConfig,
    pub layout: LayoutOpts,
    pub ordering: HopOrdering,
}

impl TopoConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// 编译分类模式，得到推导选项
    pub fn flow_opts(&self) -> Result<FlowOpts, ConfigError> {
        Ok(FlowOpts {
            classifier: self.classifier.compile()?,
            ordering: self.ordering,
        })
    }
}
