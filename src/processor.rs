//! 精简流程编排：分区 → simple → cross → complicated → 存活集
//! 每个阶段只做删除，模式本身永不修改

use std::time::Instant;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{partition_patterns, Entry};
use crate::error::PatminResult;
use crate::reducer::{reduce_complicated, reduce_cross, reduce_simple, ReduceStats};

/// 精简结果：字典序排列的存活模式 + 各阶段统计
#[derive(Debug)]
pub struct ReduceOutcome {
    pub surviving: Vec<String>,
    pub stats: ReduceStats,
}

/// 模式精简器，核心职责：分区 + 串联三个冗余检查阶段 + 统计
#[derive(Default)]
pub struct PatternReducer;

impl PatternReducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 对模式集跑完整精简流程
    pub fn reduce<'a, I>(&self, patterns: I) -> PatminResult<ReduceOutcome>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let started = Instant::now();
        let (simple, complicated) = partition_patterns(patterns);
        let mut words: FxHashSet<String> = simple.union(&complicated).cloned().collect();

        let mut stats = ReduceStats {
            total_patterns: words.len() as u32,
            simple_patterns: simple.len() as u32,
            complicated_patterns: complicated.len() as u32,
            ..Default::default()
        };
        log::info!("Found {} patterns", words.len());

        let stage = Instant::now();
        let redundant = reduce_simple(&simple)?;
        words.retain(|w| !redundant.contains(w));
        stats.removed_simple = redundant.len() as u32;
        stats.simple_time = stage.elapsed();
        log::info!("Removed {} simple patterns", redundant.len());

        if !complicated.is_empty() {
            let stage = Instant::now();
            let remaining_simple: FxHashSet<String> =
                words.difference(&complicated).cloned().collect();
            let redundant = reduce_cross(&remaining_simple, &complicated)?;
            words.retain(|w| !redundant.contains(w));
            stats.removed_cross = redundant.len() as u32;
            stats.cross_time = stage.elapsed();
            log::info!("Removed {} simple patterns", redundant.len());

            let stage = Instant::now();
            let redundant = reduce_complicated(&complicated)?;
            words.retain(|w| !redundant.contains(w));
            stats.removed_complicated = redundant.len() as u32;
            stats.complicated_time = stage.elapsed();
            log::info!("Removed {} complicated patterns", redundant.len());
        }

        let mut surviving: Vec<String> = words.into_iter().collect();
        surviving.sort();
        stats.print_stats(started.elapsed());
        Ok(ReduceOutcome { surviving, stats })
    }

    /// 从带来源信息的词表入口：精简只看键集，来源原样透传给报告侧
    pub fn reduce_words(
        &self,
        words: &FxHashMap<String, FxHashSet<Entry>>,
    ) -> PatminResult<ReduceOutcome> {
        self.reduce(words.keys().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(patterns: &[&str]) -> Vec<String> {
        PatternReducer::new()
            .reduce(patterns.iter().copied())
            .unwrap()
            .surviving
    }

    #[test]
    fn test_anywhere_subsumption() {
        assert_eq!(reduce(&[".*cat.*", ".*cats.*"]), vec![".*cat.*"]);
    }

    #[test]
    fn test_prefix_vs_anywhere() {
        assert_eq!(reduce(&["^badword.*", ".*badword.*"]), vec![".*badword.*"]);
    }

    #[test]
    fn test_cross_simple_complicated() {
        assert_eq!(
            reduce(&["^(foo|bar)baz.*", "^foobaz.*"]),
            vec!["^(foo|bar)baz.*"]
        );
    }

    #[test]
    fn test_complicated_equivalence() {
        // (a|ab) 的每条匹配串（a、ab）都被 a(.*) 匹配
        assert_eq!(reduce(&["^(a|ab)$", "^a(.*)$"]), vec!["^a(.*)$"]);
    }

    #[test]
    fn test_no_false_removal() {
        assert_eq!(reduce(&["^cat$", "^dog$"]), vec!["^cat$", "^dog$"]);
    }

    #[test]
    fn test_not_a_subset_is_kept() {
        let out = reduce(&["^(abc|b)$", "^(b|c)$"]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_mixed_pipeline_and_counts() {
        let outcome = PatternReducer::new()
            .reduce(
                [
                    ".*cat.*",
                    ".*cats.*",      // simple 阶段移除
                    "^catfish.*",    // simple 阶段移除（.*cat.* 覆盖）
                    "^foobaz.*",     // cross 阶段移除
                    "^(foo|bar)baz.*",
                    "^(a|ab)$",      // complicated 阶段移除
                    "^a(.*)$",
                ]
                .iter()
                .copied(),
            )
            .unwrap();
        assert_eq!(
            outcome.surviving,
            vec![".*cat.*", "^(foo|bar)baz.*", "^a(.*)$"]
        );
        assert_eq!(outcome.stats.removed_simple, 2);
        assert_eq!(outcome.stats.removed_cross, 1);
        assert_eq!(outcome.stats.removed_complicated, 1);
        assert_eq!(outcome.stats.kept_patterns(), 3);
    }

    #[test]
    fn test_idempotence() {
        let first = reduce(&[
            ".*cat.*",
            ".*cats.*",
            "^badword.*",
            ".*badword.*",
            "^(a|ab)$",
            "^a.*$",
            "^cat$",
        ]);
        let second = reduce(&first.iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(first, second);
    }

    #[test]
    fn test_output_is_sorted() {
        let out = reduce(&["^zebra$", "^apple$", ".*mango.*"]);
        let mut sorted = out.clone();
        sorted.sort();
        assert_eq!(out, sorted);
    }
}
