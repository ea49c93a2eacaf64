//! rspatmin 核心错误定义
//! 封装精简流程所有核心错误，基于thiserror实现类型安全处理
use thiserror::Error;

use regex::Error as RegexError;

/// 核心错误枚举
/// 覆盖词表加载、模式分解、正则编译、自动机解析、并行批次四类失败路径
#[derive(Error, Debug)]
pub enum PatminError {
    // ===================== 词表相关错误 =====================
    /// 词表加载失败（目录缺失/版本缺失/文件读取失败）
    #[error("Word list load failed: {0}")]
    WordlistLoadError(String),

    /// UTF-16 解码失败（词表文件编码损坏）
    #[error("UTF-16 decode failed: {0}")]
    Utf16DecodeError(String),

    // ===================== 模式相关错误 =====================
    /// 简单模式锚点形状分解失败（上游数据契约被破坏，致命）
    #[error("Malformed simple pattern: {0}")]
    MalformedPattern(String),

    /// 正则表达式编译失败（正则语法错误/不支持的特性）
    #[error("Regex compilation failed: {0}")]
    RegexCompileError(#[from] RegexError),

    /// 方言解析失败（模式无法构建成自动机）
    #[error("Pattern parse failed: {0}")]
    PatternParseError(String),

    // ===================== 并行批次错误 =====================
    /// 工作线程失败（批次整体中止，不产出部分结果）
    #[error("Worker failed: {0}")]
    WorkerError(String),

    /// 结果通道异常关闭（worker panic 或提前退出）
    #[error("Result channel closed before all tasks completed: {0}")]
    PoolChannelClosed(String),

    // ===================== 输出相关错误 =====================
    /// 报告/结果写出失败
    #[error("Report write failed: {0}")]
    ReportWriteError(String),

    /// 核心逻辑不变量被破坏（核心算法约束违反，属于严重错误）
    #[error("Core invariant violation: {0}")]
    InvariantViolation(&'static str),
}

/// 全局Result类型别名
/// 统一使用PatminError作为核心错误类型
pub type PatminResult<T> = Result<T, PatminError>;
