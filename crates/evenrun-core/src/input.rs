//! 输入解析：空白分隔的整数文本 → 整数序列
use std::io::Read;

use crate::error::EvenRunError;

/// 按任意空白切分并逐个解析为 i64
/// - 空串或全空白得到空序列
/// - 遇到非法记号立即返回 InvalidInput（position 为 1 起始的记号序号）
pub fn parse_sequence(text: &str) -> Result<Vec<i64>, EvenRunError> {
    text.split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            token.parse::<i64>().map_err(|_| EvenRunError::InvalidInput {
                token: token.to_string(),
                position: i + 1,
            })
        })
        .collect()
}

/// 读取全部输入后解析
pub fn read_sequence<R: Read>(mut reader: R) -> Result<Vec<i64>, EvenRunError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_sequence(&text)
}
