//! complicated-vs-complicated 单词检查
//! 三层过滤按成本递增：字符交集 → 样例串 → 精确自动机子集判定

use regex::Regex;
use rustc_hash::FxHashSet;

use crate::automaton::RegularLanguage;
use crate::error::PatminResult;
use crate::reducer::cross::compile_anchored;

/// 字符交集过滤忽略的正则元字符
const IGNORED_META_CHARS: &str = "^$[]()|?.*";

/// 每条 word 生成的样例串数量上限
pub const SAMPLE_COUNT: usize = 2;

/// 剥掉模式外层锚点
/// 尾部 $ 被转义时保留（盲剥会损坏以字面 $ 结尾的模式）
pub fn clean_pattern(pattern: &str) -> &str {
    let stripped = pattern.strip_prefix('^').unwrap_or(pattern);
    if stripped.ends_with('$') && !stripped.ends_with("\\$") {
        &stripped[..stripped.len() - 1]
    } else {
        stripped
    }
}

/// 模式文本中的字面字符集（剔除元字符，转义符算字面）
fn literal_chars(pattern: &str) -> FxHashSet<char> {
    pattern
        .chars()
        .filter(|c| !IGNORED_META_CHARS.contains(*c))
        .collect()
}

/// 任务/候选排序键：先字符数、再字典序，保证全流程确定性
pub fn task_key(pattern: &str) -> (usize, &str) {
    (pattern.chars().count(), pattern)
}

/// 单条候选覆盖方：编译产物在快照构建时一次就绪
pub struct Candidate {
    pub raw: String,
    chars: FxHashSet<char>,
    matcher: Regex,
    language: RegularLanguage,
}

/// 冻结的候选覆盖方快照
/// 整个并行批次只读，按任务序排列
pub struct CandidateSet {
    candidates: Vec<Candidate>,
}

impl CandidateSet {
    pub fn build(complicated: &FxHashSet<String>) -> PatminResult<CandidateSet> {
        let mut patterns: Vec<&String> = complicated.iter().collect();
        patterns.sort_by(|a, b| task_key(a).cmp(&task_key(b)));

        let mut candidates = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            candidates.push(Candidate {
                raw: pattern.clone(),
                chars: literal_chars(pattern),
                matcher: compile_anchored(pattern)?,
                language: RegularLanguage::from_pattern(clean_pattern(pattern))?,
            });
        }
        Ok(CandidateSet { candidates })
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// 检查 word 是否被快照中某条候选覆盖，返回首个覆盖方
///
/// 精确判定很慢，前面垫两层快速排除：
/// - word 的字面字符与候选无交集时，候选不可能覆盖 word 的全部匹配串；
/// - 候选必须匹配 word 的全部样例串（首次用到时才生成）。
/// 两层都过了才做 word ∪ candidate ≡ candidate 的自动机判定。
pub fn check_word(word: &str, candidates: &CandidateSet) -> PatminResult<Option<String>> {
    let word_chars = literal_chars(word);
    let mut samples: Option<Vec<String>> = None;
    let mut word_language: Option<RegularLanguage> = None;

    for candidate in &candidates.candidates {
        if candidate.raw == word {
            continue;
        }
        if word_chars.intersection(&candidate.chars).next().is_none() {
            continue;
        }

        if samples.is_none() {
            // 样例串生成前整体消去 .* 通配段，这是显式近似：
            // 只用于压缩枚举空间，精确判定不走这条路径
            let elided = word.replace(".*", "");
            samples = Some(
                RegularLanguage::from_pattern(clean_pattern(&elided))?
                    .sample_strings(SAMPLE_COUNT)?,
            );
        }
        let sample_strings = samples.as_ref().unwrap();
        if !sample_strings.iter().all(|s| candidate.matcher.is_match(s)) {
            continue;
        }

        if word_language.is_none() {
            word_language = Some(RegularLanguage::from_pattern(clean_pattern(word))?);
        }
        let word_language = word_language.as_ref().unwrap();
        if word_language.is_subset_of(&candidate.language)? {
            return Ok(Some(candidate.raw.clone()));
        }
    }
    Ok(None)
}
