//! 报告与结果落盘
pub mod json;
pub mod wiki;

use std::fs;
use std::path::Path;

use crate::error::{PatminError, PatminResult};
use crate::source::WordMap;

pub use json::render_json;
pub use wiki::{make_version_range, render_wiki};

fn write_text(path: &Path, content: &str) -> PatminResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| PatminError::ReportWriteError(format!("{}: {e}", parent.display())))?;
    }
    fs::write(path, content)
        .map_err(|e| PatminError::ReportWriteError(format!("{}: {e}", path.display())))
}

/// 精简结果落盘：字典序模式，一行一条，不带来源信息
pub fn write_minimized(surviving: &[String], path: &Path) -> PatminResult<()> {
    write_text(path, &surviving.join("\n"))
}

/// JSON 报告落盘
pub fn write_json(words: &WordMap, path: &Path) -> PatminResult<()> {
    write_text(path, &render_json(words))
}

/// wiki 表格报告落盘
pub fn write_wiki(words: &WordMap, path: &Path) -> PatminResult<()> {
    write_text(path, &render_wiki(words))
}
