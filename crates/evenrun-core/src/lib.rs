//! 最长偶数连续段扫描库
//!
//! 设计要点：
//! - 核心算法 `longest_even_run` 是纯函数：单遍扫描、无副作用、对任意有限序列（含空序列）都有定义。
//! - 另提供批量形式（先按奇偶切段再取最大值），两者结果恒等，可通过 `ScanEngine` 切换。
//! - 文本解析与配置加载属于外围协作者，只有它们会返回 `EvenRunError`。

mod config;
mod error;
mod input;
mod options;
mod parity;
mod runs;
mod scan;
mod types;

pub use config::Config;
pub use error::EvenRunError;
pub use input::{parse_sequence, read_sequence};
pub use options::{OutputFormat, ScanEngine, ScanOptions, ScanStats};
pub use parity::{even_mask, is_even};
pub use runs::{longest_even_run_batched, split_runs, Run};
pub use scan::{longest_even_run, scan, scan_and_write};
pub use types::ScanReport;
