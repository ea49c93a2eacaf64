//! simple-vs-complicated 冗余检查
//! 为每条 simple 模式构造一条哨兵测试串，直接拿 complicated 正则去匹配

use regex::Regex;
use rustc_hash::FxHashSet;

use crate::error::PatminResult;

/// 私用区哨兵字符，替换 `.*` 通配段
/// 覆盖方必须自带对齐的通配才能吃掉该字符，纯字面部分永远匹配不上
pub const WILDCARD_SENTINEL: char = '\u{F000}';

/// 构造 simple 模式的规范测试串
/// 剥锚点、还原转义字面、通配段替换为哨兵字符
pub fn make_test_string(pattern: &str) -> String {
    let stripped = pattern.strip_prefix('^').unwrap_or(pattern);
    let stripped = stripped.strip_suffix('$').unwrap_or(stripped);
    stripped
        .replace("\\.", ".")
        .replace("\\$", "$")
        .replace(".*", &WILDCARD_SENTINEL.to_string())
}

/// 匹配起点锚定的正则封装（等价于从串首开始的匹配语义）
pub fn compile_anchored(pattern: &str) -> PatminResult<Regex> {
    Ok(Regex::new(&format!("^(?:{pattern})"))?)
}

/// 检查被 complicated 模式覆盖的冗余 simple 模式
pub fn reduce_cross(
    simple: &FxHashSet<String>,
    complicated: &FxHashSet<String>,
) -> PatminResult<FxHashSet<String>> {
    log::info!(
        "Checking {} simple patterns against {} complicated patterns...",
        simple.len(),
        complicated.len()
    );

    // 每条 complicated 模式只编译一次
    let mut compiled: Vec<(&str, Regex)> = Vec::with_capacity(complicated.len());
    for pattern in complicated {
        compiled.push((pattern.as_str(), compile_anchored(pattern)?));
    }

    let mut redundant: FxHashSet<String> = FxHashSet::default();
    for word in simple {
        let test_string = make_test_string(word);
        if let Some((cover, _)) = compiled.iter().find(|(_, re)| re.is_match(&test_string)) {
            log::debug!("{word} is a subset of {cover}");
            redundant.insert(word.clone());
        }
    }
    Ok(redundant)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(patterns: &[&str]) -> FxHashSet<String> {
        patterns.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_make_test_string() {
        assert_eq!(make_test_string(".*cat.*"), "\u{F000}cat\u{F000}");
        assert_eq!(make_test_string("^foobaz.*"), "foobaz\u{F000}");
        assert_eq!(make_test_string(".*tail$"), "\u{F000}tail");
        assert_eq!(make_test_string("^exact$"), "exact");
        assert_eq!(make_test_string(".*bad\\.word.*"), "\u{F000}bad.word\u{F000}");
    }

    #[test]
    fn test_prefix_covered_by_grouped_prefix() {
        let redundant =
            reduce_cross(&set(&["^foobaz.*"]), &set(&["^(foo|bar)baz.*"])).unwrap();
        assert_eq!(redundant, set(&["^foobaz.*"]));
    }

    #[test]
    fn test_sentinel_blocks_literal_only_cover() {
        // ^cat(s|z)$ 并不覆盖 .*cat.*（测试串以哨兵开头）
        let redundant = reduce_cross(&set(&[".*cat.*"]), &set(&["^cat(s|z)$"])).unwrap();
        assert!(redundant.is_empty());
    }

    #[test]
    fn test_wildcard_alignment_required() {
        // ^ca.*t$ 锚定了结尾t，吃不掉 ^ca.* 尾部的哨兵
        let redundant = reduce_cross(&set(&["^ca.*"]), &set(&["^ca(.*)t$"])).unwrap();
        assert!(redundant.is_empty());
        // 自带对齐通配的覆盖方则能吃掉哨兵
        let redundant = reduce_cross(&set(&["^cat.*"]), &set(&["^ca(t|d).*"])).unwrap();
        assert_eq!(redundant, set(&["^cat.*"]));
    }

    #[test]
    fn test_escaped_dot_in_simple_pattern() {
        // 测试串还原 \. 为字面点，complicated 方按正则 . 任意匹配
        let redundant =
            reduce_cross(&set(&[".*bad\\.word.*"]), &set(&[".*bad.wor(d|t).*"])).unwrap();
        assert_eq!(redundant, set(&[".*bad\\.word.*"]));
    }
}
