//! 受限正则方言的精确语言能力
//! 提供 from_pattern/union/is_equivalent/contains_string/sample_strings，
//! 等价判定走 规范最小化DFA同构 的标准判定流程
pub mod alphabet;
pub mod dfa;
pub mod nfa;

use regex_syntax::hir::Hir;
use regex_syntax::Parser;

use crate::automaton::alphabet::Alphabet;
use crate::automaton::dfa::Dfa;
use crate::automaton::nfa::Nfa;
use crate::error::{PatminError, PatminResult};

/// 样例串枚举的扩展次数上限，防止病态模式拖死枚举
const SAMPLE_EXPANSION_LIMIT: usize = 10_000;

/// 一个受限方言模式所描述的正则语言
#[derive(Debug, Clone)]
pub struct RegularLanguage {
    hir: Hir,
}

impl RegularLanguage {
    /// 解析（已剥掉外层锚点的）方言模式
    pub fn from_pattern(pattern: &str) -> PatminResult<RegularLanguage> {
        let hir = Parser::new()
            .parse(pattern)
            .map_err(|e| PatminError::PatternParseError(format!("{pattern}: {e}")))?;
        Ok(RegularLanguage { hir })
    }

    /// 两个语言的并
    pub fn union(&self, other: &RegularLanguage) -> RegularLanguage {
        RegularLanguage {
            hir: Hir::alternation(vec![self.hir.clone(), other.hir.clone()]),
        }
    }

    /// 语言等价判定
    /// 在两模式的联合区间字母表上构建DFA，各自规范最小化后比同构
    pub fn is_equivalent(&self, other: &RegularLanguage) -> PatminResult<bool> {
        let alphabet = Alphabet::from_hirs(&[&self.hir, &other.hir]);
        let a = self.minimal_dfa(&alphabet)?;
        let b = other.minimal_dfa(&alphabet)?;
        Ok(a.is_isomorphic(&b))
    }

    /// 子集判定：self ⊆ other ⟺ (self ∪ other) ≡ other
    pub fn is_subset_of(&self, other: &RegularLanguage) -> PatminResult<bool> {
        self.union(other).is_equivalent(other)
    }

    /// 字符串隶属判定
    pub fn contains_string(&self, input: &str) -> PatminResult<bool> {
        let alphabet = Alphabet::from_hirs(&[&self.hir]);
        let dfa = self.dfa(&alphabet)?;
        Ok(dfa.accepts_symbols(input.chars().map(|c| alphabet.symbol_of_char(c))))
    }

    /// 最短优先枚举至多 n 条被接受的字符串
    /// 每个区间取一个代表字符；语言少于 n 条串时返回实际条数
    pub fn sample_strings(&self, n: usize) -> PatminResult<Vec<String>> {
        let alphabet = Alphabet::from_hirs(&[&self.hir]);
        let dfa = self.dfa(&alphabet)?;
        let alive = dfa.co_reachable();

        let mut samples = Vec::new();
        let mut queue: std::collections::VecDeque<(usize, String)> =
            std::collections::VecDeque::new();
        queue.push_back((dfa.start(), String::new()));
        let mut expansions = 0usize;

        while let Some((state, prefix)) = queue.pop_front() {
            if samples.len() >= n || expansions >= SAMPLE_EXPANSION_LIMIT {
                break;
            }
            if dfa.is_accepting(state) {
                samples.push(prefix.clone());
                if samples.len() >= n {
                    break;
                }
            }
            for symbol in 0..alphabet.len() {
                let target = dfa.next_state(state, symbol);
                if !alive[target] {
                    continue;
                }
                let Some(c) = alphabet.representative(symbol) else {
                    continue;
                };
                let mut next = prefix.clone();
                next.push(c);
                queue.push_back((target, next));
                expansions += 1;
            }
        }
        Ok(samples)
    }

    fn dfa(&self, alphabet: &Alphabet) -> PatminResult<Dfa> {
        let nfa = Nfa::from_hir(&self.hir, alphabet)?;
        Ok(Dfa::from_nfa(&nfa, alphabet.len()))
    }

    fn minimal_dfa(&self, alphabet: &Alphabet) -> PatminResult<Dfa> {
        Ok(self.dfa(alphabet)?.minimize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(pattern: &str) -> RegularLanguage {
        RegularLanguage::from_pattern(pattern).unwrap()
    }

    #[test]
    fn test_equivalent_languages() {
        assert!(lang("a|ab").union(&lang("a.*")).is_equivalent(&lang("a.*")).unwrap());
        assert!(lang("(a|b)c").is_equivalent(&lang("ac|bc")).unwrap());
        assert!(!lang("abc|b").is_equivalent(&lang("b")).unwrap());
    }

    #[test]
    fn test_subset_decision() {
        // (a|ab) ⊆ a.*，反向不成立
        assert!(lang("(a|ab)").is_subset_of(&lang("a.*")).unwrap());
        assert!(!lang("a.*").is_subset_of(&lang("(a|ab)")).unwrap());
        // abc|b ⊄ b
        assert!(!lang("abc|b").is_subset_of(&lang("b")).unwrap());
    }

    #[test]
    fn test_contains_string() {
        let l = lang("colou?r");
        assert!(l.contains_string("color").unwrap());
        assert!(l.contains_string("colour").unwrap());
        assert!(!l.contains_string("colouur").unwrap());
    }

    #[test]
    fn test_char_class() {
        let l = lang("[o0]mg");
        assert!(l.contains_string("omg").unwrap());
        assert!(l.contains_string("0mg").unwrap());
        assert!(!l.contains_string("1mg").unwrap());
    }

    #[test]
    fn test_sample_strings_shortest_first() {
        let samples = lang("(a|ab)").sample_strings(2).unwrap();
        assert_eq!(samples, vec!["a".to_string(), "ab".to_string()]);

        let unbounded = lang("ab*").sample_strings(3).unwrap();
        assert_eq!(unbounded, vec!["a", "ab", "abb"]);
    }

    #[test]
    fn test_sample_strings_finite_language_short() {
        let samples = lang("xy").sample_strings(5).unwrap();
        assert_eq!(samples, vec!["xy".to_string()]);
    }

    #[test]
    fn test_empty_pattern_matches_empty_string() {
        let l = lang("");
        assert!(l.contains_string("").unwrap());
        assert!(!l.contains_string("a").unwrap());
    }
}
