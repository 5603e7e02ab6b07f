//! 批量形式：先按奇偶切分为极大连续段，再在偶数段中取最大长度
use crate::parity::even_mask;

/// 一个极大同奇偶连续段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// 段内元素是否全为偶数
    pub even: bool,
    /// 段在输入中的起始下标
    pub start: usize,
    /// 段长度（元素个数）
    pub len: usize,
}

/// 将输入切分为极大同奇偶连续段
/// - 边界 = {0} ∪ {掩码发生变化的下标} ∪ {len}
/// - 相邻边界之差即段长；各段按从左到右顺序覆盖整个输入
pub fn split_runs(sequence: &[i64]) -> Vec<Run> {
    let mask = even_mask(sequence);
    if mask.is_empty() {
        return Vec::new();
    }

    let mut bounds: Vec<usize> = Vec::with_capacity(mask.len() + 1);
    bounds.push(0);
    bounds.extend(
        mask.windows(2)
            .enumerate()
            .filter(|(_, w)| w[0] != w[1])
            .map(|(i, _)| i + 1),
    );
    bounds.push(mask.len());

    bounds
        .windows(2)
        .map(|b| Run { even: mask[b[0]], start: b[0], len: b[1] - b[0] })
        .collect()
}

/// 批量形式的最长偶数段长度；无偶数段时返回 0
pub fn longest_even_run_batched(sequence: &[i64]) -> usize {
    split_runs(sequence)
        .iter()
        .filter(|r| r.even)
        .map(|r| r.len)
        .max()
        .unwrap_or(0)
}
