//! JSON 报告
//! 模式按字典序、语言按词表固定顺序、版本升序，紧凑输出

use serde_json::{Map, Value};

use crate::source::WordMap;

/// 渲染完整词表的 JSON 报告
pub fn render_json(words: &WordMap) -> String {
    let mut sorted_words: Vec<&String> = words.keys().collect();
    sorted_words.sort();

    let mut root = Map::new();
    for word in sorted_words {
        let mut entries: Vec<_> = words[word].iter().collect();
        // Entry 的派生顺序就是 (语言表顺序, 版本升序)
        entries.sort();

        let mut by_language = Map::new();
        for entry in entries {
            by_language
                .entry(entry.language.code().to_string())
                .or_insert_with(|| Value::Array(Vec::new()))
                .as_array_mut()
                .expect("language bucket is always an array")
                .push(Value::from(entry.version));
        }
        root.insert(word.clone(), Value::Object(by_language));
    }
    Value::Object(root).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Entry, Language};
    use rustc_hash::FxHashSet;

    #[test]
    fn test_render_json_ordering() {
        let mut words = WordMap::default();
        let mut entries = FxHashSet::default();
        entries.insert(Entry { language: Language::Een, version: 12 });
        entries.insert(Entry { language: Language::Jja, version: 3 });
        entries.insert(Entry { language: Language::Jja, version: 1 });
        words.insert("^b$".to_string(), entries);
        let mut other = FxHashSet::default();
        other.insert(Entry { language: Language::Common, version: 20 });
        words.insert("^a$".to_string(), other);

        let json = render_json(&words);
        // 模式字典序，语言按词表顺序（jja 在 een 前），版本升序，紧凑分隔符
        assert_eq!(
            json,
            r#"{"^a$":{"common":[20]},"^b$":{"jja":[1,3],"een":[12]}}"#
        );
    }

    #[test]
    fn test_render_json_non_ascii_unescaped() {
        let mut words = WordMap::default();
        let mut entries = FxHashSet::default();
        entries.insert(Entry { language: Language::Jja, version: 2 });
        words.insert(".*ばか.*".to_string(), entries);
        assert_eq!(render_json(&words), r#"{".*ばか.*":{"jja":[2]}}"#);
    }
}
