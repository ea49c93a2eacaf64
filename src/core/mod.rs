// 核心公共结构体+枚举
pub mod pattern;
pub mod provenance;
pub mod shape;

pub use pattern::{is_complicated, partition_patterns};
pub use provenance::{Entry, Language, LANGUAGES};
pub use shape::Shape;
