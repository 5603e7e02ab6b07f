//! 错误类型（输入解析与配置加载）
//!
//! 扫描器本身是全函数，永不失败；只有外围协作者（文本解析、配置文件、输出写入）会返回错误。
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvenRunError {
    /// 输入中的某个记号无法解析为整数（position 从 1 开始计数）
    #[error("invalid input: token #{position} `{token}` is not an integer")]
    InvalidInput { token: String, position: usize },

    /// 配置项取值非法
    #[error("invalid config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
