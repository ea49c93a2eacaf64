// 词表来源解析
pub mod wordlist;

pub use wordlist::{latest_version, list_versions, load_all, load_version, WordMap};
