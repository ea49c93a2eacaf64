//! 简单模式形状分解器
//! 负责将简单模式按首尾锚点拆解为四种形状，并提取字面核心串

use serde::{Deserialize, Serialize};

use crate::error::{PatminError, PatminResult};

/// 简单模式形状枚举
/// 每种形状对应一组固定的锚点/通配组合，core 为去掉锚点后的字面串
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// `.*core.*` → 任意位置包含 core
    Anywhere(String),
    /// `^core.*` → 以 core 开头
    Prefix(String),
    /// `.*core$` → 以 core 结尾
    Suffix(String),
    /// `^core$` → 恰好等于 core
    Whole(String),
}

impl Shape {
    /// 按首尾锚点分解简单模式
    /// 方言保证四种组合之一，其余组合说明上游数据契约被破坏，直接报错
    pub fn decompose(pattern: &str) -> PatminResult<Shape> {
        if pattern.ends_with(".*") {
            if pattern.starts_with(".*") {
                // 退化输入 ".*" 首尾通配重叠，核心串为空
                let core = pattern.get(2..pattern.len().saturating_sub(2)).unwrap_or("");
                Ok(Shape::Anywhere(core.to_string()))
            } else if pattern.starts_with('^') {
                Ok(Shape::Prefix(pattern[1..pattern.len() - 2].to_string()))
            } else {
                Err(PatminError::MalformedPattern(format!(
                    "expected pattern to start with '.*' or '^': {pattern}"
                )))
            }
        } else if pattern.ends_with('$') {
            if pattern.starts_with(".*") {
                Ok(Shape::Suffix(pattern[2..pattern.len() - 1].to_string()))
            } else if pattern.starts_with('^') {
                Ok(Shape::Whole(pattern[1..pattern.len() - 1].to_string()))
            } else {
                Err(PatminError::MalformedPattern(format!(
                    "expected pattern to start with '.*' or '^': {pattern}"
                )))
            }
        } else {
            Err(PatminError::MalformedPattern(format!(
                "expected pattern to end with '.*' or '$': {pattern}"
            )))
        }
    }

    /// 字面核心串
    pub fn core(&self) -> &str {
        match self {
            Shape::Anywhere(core)
            | Shape::Prefix(core)
            | Shape::Suffix(core)
            | Shape::Whole(core) => core,
        }
    }

    /// 由形状+核心串还原原始模式文本
    pub fn to_pattern(&self) -> String {
        match self {
            Shape::Anywhere(core) => format!(".*{core}.*"),
            Shape::Prefix(core) => format!("^{core}.*"),
            Shape::Suffix(core) => format!(".*{core}$"),
            Shape::Whole(core) => format!("^{core}$"),
        }
    }
}
