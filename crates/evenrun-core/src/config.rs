//! 配置文件加载（TOML）
//!
//! 优先级：命令行参数 > 配置文件 > 内置默认值。
use serde::Deserialize;
use std::path::Path;

use crate::error::EvenRunError;
use crate::options::{OutputFormat, ScanEngine, ScanOptions};

/// 配置文件结构，所有字段可选
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// "linear" 或 "runs"
    #[serde(default)]
    pub engine: Option<String>,
    /// "text" 或 "json"
    #[serde(default)]
    pub format: Option<String>,
}

impl Config {
    pub fn from_toml_str(txt: &str) -> Result<Self, EvenRunError> {
        Ok(toml::from_str(txt)?)
    }

    pub fn load(path: &Path) -> Result<Self, EvenRunError> {
        let txt = std::fs::read_to_string(path)?;
        Self::from_toml_str(&txt)
    }

    /// 合并命令行参数得到最终扫描选项
    pub fn scan_options(
        &self,
        engine: Option<ScanEngine>,
        format: Option<OutputFormat>,
    ) -> Result<ScanOptions, EvenRunError> {
        let engine = match (engine, self.engine.as_deref()) {
            (Some(e), _) => e,
            (None, Some(s)) => s.parse()?,
            (None, None) => ScanEngine::default(),
        };
        let format = match (format, self.format.as_deref()) {
            (Some(f), _) => f,
            (None, Some(s)) => s.parse()?,
            (None, None) => OutputFormat::default(),
        };
        Ok(ScanOptions { engine, format })
    }
}
