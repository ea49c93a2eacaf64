//! simple-vs-simple 冗余检查
//! 核心串的包含关系直接决定语言包含：更短的核心 = 更泛的匹配

use rustc_hash::FxHashSet;

use crate::core::Shape;
use crate::error::PatminResult;

/// 在 bucket 中寻找 word 的真子串核心（不含 word 自身）
fn substring_cover<'a>(
    bucket: &'a FxHashSet<String>,
    word: &str,
    allow_equal: bool,
) -> Option<&'a str> {
    bucket
        .iter()
        .find(|sub| (allow_equal || sub.as_str() != word) && word.contains(sub.as_str()))
        .map(|s| s.as_str())
}

/// 在 bucket 中寻找 word 的前缀核心
fn prefix_cover<'a>(
    bucket: &'a FxHashSet<String>,
    word: &str,
    allow_equal: bool,
) -> Option<&'a str> {
    bucket
        .iter()
        .find(|sub| (allow_equal || sub.as_str() != word) && word.starts_with(sub.as_str()))
        .map(|s| s.as_str())
}

/// 在 bucket 中寻找 word 的后缀核心
fn suffix_cover<'a>(
    bucket: &'a FxHashSet<String>,
    word: &str,
    allow_equal: bool,
) -> Option<&'a str> {
    bucket
        .iter()
        .find(|sub| (allow_equal || sub.as_str() != word) && word.ends_with(sub.as_str()))
        .map(|s| s.as_str())
}

/// 检查被其他 simple 模式覆盖的冗余 simple 模式
/// 返回冗余模式的原始文本集合（由形状+核心串还原）
pub fn reduce_simple(simple: &FxHashSet<String>) -> PatminResult<FxHashSet<String>> {
    log::info!("Checking {} simple patterns...", simple.len());

    let mut anywhere: FxHashSet<String> = FxHashSet::default();
    let mut prefix: FxHashSet<String> = FxHashSet::default();
    let mut suffix: FxHashSet<String> = FxHashSet::default();
    let mut whole: FxHashSet<String> = FxHashSet::default();
    for pattern in simple {
        match Shape::decompose(pattern)? {
            Shape::Anywhere(core) => {
                anywhere.insert(core);
            }
            Shape::Prefix(core) => {
                prefix.insert(core);
            }
            Shape::Suffix(core) => {
                suffix.insert(core);
            }
            Shape::Whole(core) => {
                whole.insert(core);
            }
        }
    }

    let mut redundant: FxHashSet<String> = FxHashSet::default();

    for word in &anywhere {
        if let Some(cover) = substring_cover(&anywhere, word, false) {
            log::debug!(".*{word}.* is a subset of .*{cover}.*");
            redundant.insert(Shape::Anywhere(word.clone()).to_pattern());
        }
    }

    for word in &prefix {
        if let Some(cover) = substring_cover(&anywhere, word, true) {
            log::debug!("^{word}.* is a subset of .*{cover}.*");
            redundant.insert(Shape::Prefix(word.clone()).to_pattern());
        } else if let Some(cover) = prefix_cover(&prefix, word, false) {
            log::debug!("^{word}.* is a subset of ^{cover}.*");
            redundant.insert(Shape::Prefix(word.clone()).to_pattern());
        }
    }

    for word in &suffix {
        if let Some(cover) = substring_cover(&anywhere, word, true) {
            log::debug!(".*{word}$ is a subset of .*{cover}.*");
            redundant.insert(Shape::Suffix(word.clone()).to_pattern());
        } else if let Some(cover) = suffix_cover(&suffix, word, false) {
            log::debug!(".*{word}$ is a subset of .*{cover}$");
            redundant.insert(Shape::Suffix(word.clone()).to_pattern());
        }
    }

    for word in &whole {
        if let Some(cover) = substring_cover(&anywhere, word, true) {
            log::debug!("^{word}$ is a subset of .*{cover}.*");
            redundant.insert(Shape::Whole(word.clone()).to_pattern());
        } else if let Some(cover) = prefix_cover(&prefix, word, true) {
            log::debug!("^{word}$ is a subset of ^{cover}.*");
            redundant.insert(Shape::Whole(word.clone()).to_pattern());
        } else if let Some(cover) = suffix_cover(&suffix, word, true) {
            log::debug!("^{word}$ is a subset of .*{cover}$");
            redundant.insert(Shape::Whole(word.clone()).to_pattern());
        }
    }

    Ok(redundant)
}
