//! 扫描主流程：最长偶数连续段
use std::io::Write;

use crate::error::EvenRunError;
use crate::options::{OutputFormat, ScanEngine, ScanOptions, ScanStats};
use crate::parity::is_even;
use crate::runs::longest_even_run_batched;
use crate::types::ScanReport;

/// 最长偶数连续段的长度（单遍扫描）
///
/// 只维护当前偶数段长度：遇偶数加一，遇奇数清零，每步更新最大值。
/// 空输入返回 0；结果不超过输入长度。
pub fn longest_even_run(sequence: &[i64]) -> usize {
    let mut best = 0;
    let mut current = 0;
    for &n in sequence {
        if is_even(n) {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }
    best
}

/// 按选项中的引擎计算结果，并附带统计信息
pub fn scan(sequence: &[i64], opts: &ScanOptions) -> ScanReport {
    let longest_even_run = match opts.engine {
        ScanEngine::Linear => longest_even_run(sequence),
        ScanEngine::Runs => longest_even_run_batched(sequence),
    };
    ScanReport { longest_even_run, stats: collect_stats(sequence) }
}

/// 扫描并将结果写入 `out`
/// - Text：仅输出整数结果
/// - Json：输出完整的 ScanReport
/// 两种格式都以换行结尾。
pub fn scan_and_write(sequence: &[i64], out: &mut dyn Write, opts: &ScanOptions) -> Result<ScanReport, EvenRunError> {
    let report = scan(sequence, opts);
    match opts.format {
        OutputFormat::Text => writeln!(out, "{}", report.longest_even_run)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(report)
}

/// 统计元素数与段数；每个与前一元素奇偶不同（或位于开头）的元素开启一个新段
fn collect_stats(sequence: &[i64]) -> ScanStats {
    let mut stats = ScanStats { elements: sequence.len(), ..ScanStats::default() };
    let mut prev: Option<bool> = None;
    for &n in sequence {
        let even = is_even(n);
        if even {
            stats.even_elements += 1;
        }
        if prev != Some(even) {
            stats.runs += 1;
            if even {
                stats.even_runs += 1;
            }
        }
        prev = Some(even);
    }
    stats
}
