//! 套卷名称与选项字母
//!
//! 序号按双射 26 进制转换为字母，与表格列名一致：
//! `0 → A`，`25 → Z`，`26 → AA`，`27 → AB` ……

/// 将从0开始的序号转换为字母标签
///
/// # 参数
/// - `index`: 从0开始的序号
/// - `base`: 起始字母（`b'A'` 或 `b'a'`）
pub fn alpha_label(index: usize, base: u8) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((base + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// 选项字母：`0 → a`，`1 → b` ……
pub fn option_letter(index: usize) -> String {
    alpha_label(index, b'a')
}

/// 套卷名称：`0 → Set A`，`1 → Set B` ……
pub fn set_name(index: usize) -> String {
    format!("Set {}", alpha_label(index, b'A'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_alphabet() {
        assert_eq!(set_name(0), "Set A");
        assert_eq!(set_name(1), "Set B");
        assert_eq!(set_name(25), "Set Z");
        assert_eq!(option_letter(0), "a");
        assert_eq!(option_letter(3), "d");
    }

    #[test]
    fn test_past_twenty_six() {
        assert_eq!(set_name(26), "Set AA");
        assert_eq!(set_name(27), "Set AB");
        assert_eq!(set_name(51), "Set AZ");
        assert_eq!(set_name(52), "Set BA");
        assert_eq!(set_name(701), "Set ZZ");
        assert_eq!(set_name(702), "Set AAA");
        assert_eq!(option_letter(26), "aa");
    }

    #[test]
    fn test_labels_are_unique() {
        let labels: std::collections::HashSet<String> = (0..1000).map(option_letter).collect();
        assert_eq!(labels.len(), 1000);
    }
}
