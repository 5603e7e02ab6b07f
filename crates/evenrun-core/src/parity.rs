//! 奇偶判定

/// 偶数判定：对 2 取余为 0 即为偶数（包括 0 与负数，例如 -4）
#[inline]
pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}

/// 逐元素偶数掩码：与输入等长，第 i 位表示第 i 个元素是否为偶数
pub fn even_mask(sequence: &[i64]) -> Vec<bool> {
    sequence.iter().map(|&n| is_even(n)).collect()
}
