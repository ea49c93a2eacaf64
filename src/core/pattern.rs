//! 模式分类器
//! 负责将输入模式集切分为 simple / complicated 两个互斥子集

use rustc_hash::FxHashSet;

/// 判断单条模式是否为 complicated 模式
/// 分组/字符集/或分支/可选算子任意出现一个即为 complicated
#[inline(always)]
pub fn is_complicated(pattern: &str) -> bool {
    // 字节级检查，标记字符全部是ASCII，无需解码为char
    pattern
        .as_bytes()
        .iter()
        .any(|&b| matches!(b, b'[' | b']' | b'(' | b')' | b'|' | b'?'))
}

/// 将模式集切分为 (simple, complicated) 互斥分区
/// 分类对方言全集是全函数，不产生错误
pub fn partition_patterns<'a, I>(patterns: I) -> (FxHashSet<String>, FxHashSet<String>)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut simple = FxHashSet::default();
    let mut complicated = FxHashSet::default();
    for pattern in patterns {
        if is_complicated(pattern) {
            complicated.insert(pattern.to_string());
        } else {
            simple.insert(pattern.to_string());
        }
    }
    (simple, complicated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_complicated_markers() {
        assert!(is_complicated("^(foo|bar)baz.*"));
        assert!(is_complicated(".*[o0]mg.*"));
        assert!(is_complicated("^colou?r$"));
        assert!(!is_complicated(".*cat.*"));
        assert!(!is_complicated("^bad\\.word.*"));
    }

    #[test]
    fn test_partition_is_disjoint_and_total() {
        let input = vec![".*cat.*", "^(a|b)$", "^dog.*", ".*x[yz]$"];
        let (simple, complicated) = partition_patterns(input.iter().copied());
        assert_eq!(simple.len() + complicated.len(), input.len());
        assert!(simple.contains(".*cat.*"));
        assert!(simple.contains("^dog.*"));
        assert!(complicated.contains("^(a|b)$"));
        assert!(complicated.contains(".*x[yz]$"));
        assert!(simple.is_disjoint(&complicated));
    }
}
