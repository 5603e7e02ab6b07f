//! 公共类型（对外暴露）
use serde::Serialize;

use crate::options::ScanStats;

/// 单次扫描的结果（JSON 输出即此结构）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub longest_even_run: usize,
    pub stats: ScanStats,
}
