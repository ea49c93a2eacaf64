//! 词表来源信息
//! 记录每条模式出现在哪些语言词表、哪些版本，核心精简逻辑不读取该信息

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// 语言词表枚举，变体顺序即词表固定顺序（报告输出按此排序）
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Jja,
    Een,
    Efr,
    Ees,
    Pen,
    Pfr,
    Pde,
    Pit,
    Pes,
    Pnl,
    Kko,
    Czh,
    Ppt,
    Pru,
    Ept,
    Tzh,
    Ten,
    Common,
}

/// 全部语言，按词表固定顺序
pub const LANGUAGES: [Language; 18] = [
    Language::Jja,
    Language::Een,
    Language::Efr,
    Language::Ees,
    Language::Pen,
    Language::Pfr,
    Language::Pde,
    Language::Pit,
    Language::Pes,
    Language::Pnl,
    Language::Kko,
    Language::Czh,
    Language::Ppt,
    Language::Pru,
    Language::Ept,
    Language::Tzh,
    Language::Ten,
    Language::Common,
];

impl Language {
    /// 语言代码（与词表文件命名一致）
    pub fn code(&self) -> &'static str {
        match self {
            Language::Jja => "jja",
            Language::Een => "een",
            Language::Efr => "efr",
            Language::Ees => "ees",
            Language::Pen => "pen",
            Language::Pfr => "pfr",
            Language::Pde => "pde",
            Language::Pit => "pit",
            Language::Pes => "pes",
            Language::Pnl => "pnl",
            Language::Kko => "kko",
            Language::Czh => "czh",
            Language::Ppt => "ppt",
            Language::Pru => "pru",
            Language::Ept => "ept",
            Language::Tzh => "tzh",
            Language::Ten => "ten",
            Language::Common => "common",
        }
    }

    /// 由词表文件名（不含扩展名）识别语言
    /// `common` 为共享词表，其余文件名是语言表中的数字下标
    pub fn from_file_stem(stem: &str) -> Option<Language> {
        if stem == "common" {
            return Some(Language::Common);
        }
        let index: usize = stem.parse().ok()?;
        LANGUAGES.get(index).copied()
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// 单条来源记录：某语言词表的某个版本包含该模式
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Entry {
    pub language: Language,
    pub version: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_file_stem() {
        assert_eq!(Language::from_file_stem("common"), Some(Language::Common));
        assert_eq!(Language::from_file_stem("0"), Some(Language::Jja));
        assert_eq!(Language::from_file_stem("14"), Some(Language::Ept));
        assert_eq!(Language::from_file_stem("16"), Some(Language::Ten));
        assert_eq!(Language::from_file_stem("99"), None);
        assert_eq!(Language::from_file_stem("abc"), None);
    }

    #[test]
    fn test_language_order_matches_table() {
        assert!(Language::Jja < Language::Een);
        assert!(Language::Ten < Language::Common);
        for (i, lang) in LANGUAGES.iter().enumerate() {
            assert_eq!(Language::from_file_stem(&i.to_string()), Some(*lang));
        }
    }
}
