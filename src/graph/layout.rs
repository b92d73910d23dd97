//! 换行网格布局：从左到右摆放，超过最大行宽时换到下一行。

use serde::{Deserialize, Serialize};

use super::Position;

/// 布局参数（像素）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOpts {
    pub origin: Position,
    pub node_width: f64,
    pub node_height: f64,
    pub horizontal_gap: f64,
    pub vertical_gap: f64,
    /// 节点右边缘允许达到的最大 x
    pub max_row_width: f64,
}

impl Default for LayoutOpts {
    fn default() -> Self {
        Self {
            origin: Position::new(50.0, 50.0),
            node_width: 200.0,
            node_height: 80.0,
            horizontal_gap: 100.0,
            vertical_gap: 80.0,
            max_row_width: 1200.0,
        }
    }
}

/// 为 `count` 个节点依次计算坐标。
///
/// 放下一个节点后光标右移；若下一个节点的右边缘会超过 `max_row_width`，
/// 光标回到 `origin.x` 并下移一行。最后一个节点之后不换行。
/// 单个节点比整行还宽时，每行只放一个。
pub fn wrap_grid_positions(count: usize, opts: &LayoutOpts) -> Vec<Position> {
    let mut positions = Vec::with_capacity(count);
    let mut cursor = opts.origin;

    for i in 0..count {
        positions.push(cursor);
        if i + 1 == count {
            break;
        }
        cursor.x += opts.node_width + opts.horizontal_gap;
        if cursor.x + opts.node_width > opts.max_row_width {
            cursor.x = opts.origin.x;
            cursor.y += opts.node_height + opts.vertical_gap;
        }
    }
    positions
}
