//! 扫描选项与统计信息（模块）
use serde::Serialize;
use std::str::FromStr;

use crate::error::EvenRunError;

/// 扫描引擎类型
/// - Linear：单遍计数器，O(n) 时间、O(1) 额外空间（默认）。
/// - Runs：先切分奇偶段再取最大值，便于观察分段过程。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanEngine {
    #[default]
    Linear,
    Runs,
}

impl FromStr for ScanEngine {
    type Err = EvenRunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(ScanEngine::Linear),
            "runs" => Ok(ScanEngine::Runs),
            other => Err(EvenRunError::Config(format!("unknown engine `{other}` (expected linear or runs)"))),
        }
    }
}

/// 输出格式：纯整数或 JSON 报告
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = EvenRunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(EvenRunError::Config(format!("unknown format `{other}` (expected text or json)"))),
        }
    }
}

/// 扫描选项
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// 计算最长偶数段所用的引擎
    pub engine: ScanEngine,
    /// scan_and_write 的输出格式
    pub format: OutputFormat,
}

/// 扫描统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub elements: usize,
    pub even_elements: usize,
    pub runs: usize,
    pub even_runs: usize,
}
