// 核心公共结构体+枚举
pub mod core;
// 受限方言的精确语言能力（NFA/DFA/等价判定）
pub mod automaton;
// 冗余检查三阶段 + 线程池
pub mod reducer;
// 精简流程编排
pub mod processor;
// 词表来源解析（分版本UTF-16词表）
pub mod source;
// 报告渲染 + 结果落盘
pub mod report;
// 错误定义
pub mod error;

// 顶层导出常用类型
pub use automaton::RegularLanguage;
pub use core::{is_complicated, partition_patterns, Entry, Language, Shape, LANGUAGES};
pub use error::{PatminError, PatminResult};
pub use processor::{PatternReducer, ReduceOutcome};
pub use reducer::ReduceStats;
pub use source::WordMap;
