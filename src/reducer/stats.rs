//! 负责精简统计数据的定义、更新与格式化输出

use std::time::Duration;

/// 模式精简统计信息
/// 记录精简过程中的各阶段指标：
/// 1. 输入模式总数与 simple/complicated 分区规模
/// 2. 各阶段检查数/移除数
/// 3. 各阶段耗时
#[derive(Debug, Default)]
pub struct ReduceStats {
    // ========== 分区统计 ==========
    /// 输入模式总数
    pub total_patterns: u32,
    /// simple 模式数
    pub simple_patterns: u32,
    /// complicated 模式数
    pub complicated_patterns: u32,

    // ========== 移除统计 ==========
    /// simple-vs-simple 阶段移除数
    pub removed_simple: u32,
    /// simple-vs-complicated 阶段移除数
    pub removed_cross: u32,
    /// complicated-vs-complicated 阶段移除数
    pub removed_complicated: u32,

    // ========== 耗时统计 ==========
    pub simple_time: Duration,
    pub cross_time: Duration,
    pub complicated_time: Duration,
}

impl ReduceStats {
    /// 移除总数
    pub fn removed_total(&self) -> u32 {
        self.removed_simple + self.removed_cross + self.removed_complicated
    }

    /// 存活模式数
    pub fn kept_patterns(&self) -> u32 {
        self.total_patterns - self.removed_total()
    }

    /// 格式化输出统计信息（结构化日志）
    /// 参数：total_time - 精简全程耗时
    pub fn print_stats(&self, total_time: Duration) {
        log::info!(
            "Reduction completed | Time: {:?} | Patterns: {} -> {} | Removed: {}",
            total_time,
            self.total_patterns,
            self.kept_patterns(),
            self.removed_total()
        );
        log::debug!(
            "Partition stats: simple {} | complicated {}",
            self.simple_patterns,
            self.complicated_patterns
        );
        log::debug!(
            "Stage stats: simple removed {} ({:?}) | cross removed {} ({:?}) | complicated removed {} ({:?})",
            self.removed_simple,
            self.simple_time,
            self.removed_cross,
            self.cross_time,
            self.removed_complicated,
            self.complicated_time
        );
    }
}
