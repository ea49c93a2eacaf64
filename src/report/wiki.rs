//! wiki 表格报告
//! 版本集合折叠为区间串，按模式最新版本倒序输出表格行

use std::collections::BTreeSet;

use crate::core::LANGUAGES;
use crate::source::WordMap;

/// 补回从未公开发布的版本号：前后相邻版本都在时视为连续
fn add_missing_versions(versions: &mut BTreeSet<u32>) {
    if versions.contains(&5) && versions.contains(&10) {
        versions.extend([6, 7, 8, 9]);
    }
    for i in [15, 22, 36, 56, 58, 61] {
        if versions.contains(&(i - 1)) && versions.contains(&(i + 1)) {
            versions.insert(i);
        }
    }
}

/// 版本集合 → 逗号分隔的区间串，如 `5–10, 12, 19–21`
pub fn make_version_range<I: IntoIterator<Item = u32>>(versions: I) -> String {
    let mut versions: BTreeSet<u32> = versions.into_iter().collect();
    if versions.is_empty() {
        return String::new();
    }
    add_missing_versions(&mut versions);

    let mut ranges: Vec<(u32, u32)> = Vec::new();
    let mut iter = versions.into_iter();
    let first = iter.next().unwrap();
    let (mut start, mut prev) = (first, first);
    for v in iter {
        if prev + 1 != v {
            ranges.push((start, prev));
            start = v;
        }
        prev = v;
    }
    ranges.push((start, prev));

    ranges
        .iter()
        .map(|&(start, end)| {
            if start == end {
                start.to_string()
            } else {
                format!("{start}\u{2013}{end}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// 渲染 wikitext 表格行
/// 每条模式一行：模式原文、新版词表（≥19）的语言/版本、旧版词表（≤18）的语言/版本
pub fn render_wiki(words: &WordMap) -> String {
    let mut sorted_words: Vec<&String> = words.keys().collect();
    sorted_words.sort();

    let mut rows: Vec<(String, u32)> = Vec::with_capacity(sorted_words.len());
    for word in sorted_words {
        let entries = &words[word];
        let versions: BTreeSet<u32> = entries.iter().map(|e| e.version).collect();

        let new_langs = LANGUAGES
            .iter()
            .filter(|lang| {
                entries
                    .iter()
                    .any(|e| e.language == **lang && e.version >= 19)
            })
            .map(|lang| lang.code())
            .collect::<Vec<_>>()
            .join(", ");
        let new_versions =
            make_version_range(versions.iter().copied().filter(|&v| v >= 19));
        let old_langs = LANGUAGES
            .iter()
            .filter(|lang| {
                entries
                    .iter()
                    .any(|e| e.language == **lang && e.version <= 18)
            })
            .map(|lang| lang.code())
            .collect::<Vec<_>>()
            .join(", ");
        let old_versions =
            make_version_range(versions.iter().copied().filter(|&v| v <= 18));

        let row = [
            format!("|-\n| <nowiki>{word}</nowiki>"),
            new_langs,
            new_versions,
            old_langs,
            old_versions,
        ]
        .join(" || ")
        .replace("  ", " ")
        .trim_end_matches(' ')
        .to_string()
            + "\n";
        let newest = versions.iter().next_back().copied().unwrap_or(0);
        rows.push((row, newest));
    }

    // 稳定排序：最新版本倒序，同版本保持模式字典序
    rows.sort_by_key(|&(_, newest)| std::cmp::Reverse(newest));
    rows.into_iter().map(|(row, _)| row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Entry, Language};
    use rustc_hash::FxHashSet;

    #[test]
    fn test_version_range_collapses_runs() {
        assert_eq!(make_version_range([1, 2, 3]), "1\u{2013}3");
        assert_eq!(make_version_range([1, 3]), "1, 3");
        assert_eq!(make_version_range([4]), "4");
        assert_eq!(make_version_range([]), "");
        assert_eq!(make_version_range([1, 2, 4, 5, 9]), "1\u{2013}2, 4\u{2013}5, 9");
    }

    #[test]
    fn test_version_range_backfills_unreleased() {
        // 5 与 10 同时出现时补回 6–9
        assert_eq!(make_version_range([5, 10]), "5\u{2013}10");
        // 14 与 16 同时出现时补回 15
        assert_eq!(make_version_range([14, 16]), "14\u{2013}16");
        // 孤立的 14 不触发补回
        assert_eq!(make_version_range([14]), "14");
    }

    #[test]
    fn test_render_wiki_row_shape() {
        let mut words = WordMap::default();
        let mut entries = FxHashSet::default();
        entries.insert(Entry { language: Language::Een, version: 20 });
        entries.insert(Entry { language: Language::Jja, version: 3 });
        words.insert(".*cat.*".to_string(), entries);

        let table = render_wiki(&words);
        assert!(table.starts_with("|-\n| <nowiki>.*cat.*</nowiki> || een || 20 || jja || 3\n"));
    }

    #[test]
    fn test_render_wiki_orders_by_newest_version() {
        let mut words = WordMap::default();
        let mut old = FxHashSet::default();
        old.insert(Entry { language: Language::Jja, version: 3 });
        words.insert("^old$".to_string(), old);
        let mut new = FxHashSet::default();
        new.insert(Entry { language: Language::Een, version: 30 });
        words.insert("^new$".to_string(), new);

        let table = render_wiki(&words);
        let new_pos = table.find("^new$").unwrap();
        let old_pos = table.find("^old$").unwrap();
        assert!(new_pos < old_pos);
    }
}
