//! 请求链路推导模块
//!
//! 把同一 correlation id 下的扁平日志事件序列折叠成按首次出现排序的服务 hop 列表，
//! 并给每个 hop 标注事件数、健康状态和到下一跳的时延。

// 子模块声明
mod classify;
mod derive;
mod event;
mod hop;
mod latency;

// 重新导出公共接口
pub use classify::{ClassifierConfig, StatusClassifier};
pub use derive::{FlowOpts, HopOrdering, derive_flow, derive_flow_default};
pub use event::Event;
pub use hop::{Hop, HopStatus};
pub use latency::Latency;
