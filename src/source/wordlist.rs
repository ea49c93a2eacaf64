//! 分版本词表加载器
//! 目录布局 `<romfs>/<version>/<n>.txt`，UTF-16 文本，一行一条模式

use std::fs;
use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{Entry, Language};
use crate::error::{PatminError, PatminResult};

/// 模式 → 来源记录集
pub type WordMap = FxHashMap<String, FxHashSet<Entry>>;

/// 按BOM识别端序解码UTF-16字节流，缺省小端
pub fn decode_utf16(bytes: &[u8]) -> PatminResult<String> {
    let (payload, big_endian) = match bytes {
        [0xFF, 0xFE, rest @ ..] => (rest, false),
        [0xFE, 0xFF, rest @ ..] => (rest, true),
        _ => (bytes, false),
    };
    if payload.len() % 2 != 0 {
        return Err(PatminError::Utf16DecodeError(
            "odd byte length in UTF-16 stream".into(),
        ));
    }
    let units: Vec<u16> = payload
        .chunks_exact(2)
        .map(|pair| {
            if big_endian {
                u16::from_be_bytes([pair[0], pair[1]])
            } else {
                u16::from_le_bytes([pair[0], pair[1]])
            }
        })
        .collect();
    String::from_utf16(&units)
        .map_err(|e| PatminError::Utf16DecodeError(e.to_string()))
}

/// 加载单个版本目录下的全部语言词表
pub fn load_version(romfs: &Path, version: u32) -> PatminResult<WordMap> {
    let folder = romfs.join(version.to_string());
    let entries = fs::read_dir(&folder).map_err(|e| {
        PatminError::WordlistLoadError(format!("{}: {e}", folder.display()))
    })?;

    let mut words: WordMap = WordMap::default();
    for dir_entry in entries {
        let path = dir_entry
            .map_err(|e| PatminError::WordlistLoadError(e.to_string()))?
            .path();
        if path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        let language = Language::from_file_stem(stem).ok_or_else(|| {
            PatminError::WordlistLoadError(format!(
                "unrecognized word list file: {}",
                path.display()
            ))
        })?;

        let bytes = fs::read(&path).map_err(|e| {
            PatminError::WordlistLoadError(format!("{}: {e}", path.display()))
        })?;
        let mut text = decode_utf16(&bytes)?;
        // 版本5的 ept 词表行尾是 CRLF，就地归一
        if version == 5 && language == Language::Ept {
            text = text.replace("\r\n", "\n");
        }

        for word in text.trim_end_matches('\n').split('\n') {
            words
                .entry(word.to_string())
                .or_default()
                .insert(Entry { language, version });
        }
    }
    log::debug!(
        "Loaded {} patterns from version {version}",
        words.len()
    );
    Ok(words)
}

/// 加载全部版本目录，来源记录按 (语言, 版本) 合并
pub fn load_all(romfs: &Path) -> PatminResult<WordMap> {
    let mut words = WordMap::default();
    for version in list_versions(romfs)? {
        for (word, entries) in load_version(romfs, version)? {
            words.entry(word).or_default().extend(entries);
        }
    }
    Ok(words)
}

/// 版本目录枚举（数字目录名，升序）
pub fn list_versions(romfs: &Path) -> PatminResult<Vec<u32>> {
    let entries = fs::read_dir(romfs).map_err(|e| {
        PatminError::WordlistLoadError(format!("{}: {e}", romfs.display()))
    })?;
    let mut versions: Vec<u32> = Vec::new();
    for dir_entry in entries {
        let path = dir_entry
            .map_err(|e| PatminError::WordlistLoadError(e.to_string()))?
            .path();
        if !path.is_dir() {
            continue;
        }
        if let Some(version) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.parse::<u32>().ok())
        {
            versions.push(version);
        }
    }
    versions.sort_unstable();
    Ok(versions)
}

/// 最新版本号
pub fn latest_version(romfs: &Path) -> PatminResult<u32> {
    list_versions(romfs)?
        .last()
        .copied()
        .ok_or_else(|| {
            PatminError::WordlistLoadError(format!(
                "no version folders under {}",
                romfs.display()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16le(text: &str, bom: bool) -> Vec<u8> {
        let mut bytes = Vec::new();
        if bom {
            bytes.extend_from_slice(&[0xFF, 0xFE]);
        }
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_decode_utf16_le_with_bom() {
        let bytes = utf16le(".*cat.*\n^dog$\n", true);
        assert_eq!(decode_utf16(&bytes).unwrap(), ".*cat.*\n^dog$\n");
    }

    #[test]
    fn test_decode_utf16_default_endianness() {
        let bytes = utf16le("ばか\n", false);
        assert_eq!(decode_utf16(&bytes).unwrap(), "ばか\n");
    }

    #[test]
    fn test_decode_utf16_be_with_bom() {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in "ab".encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        assert_eq!(decode_utf16(&bytes).unwrap(), "ab");
    }

    #[test]
    fn test_decode_utf16_odd_length_fails() {
        assert!(decode_utf16(&[0x61, 0x00, 0x62]).is_err());
    }

    #[test]
    fn test_load_version_roundtrip() {
        let root = std::env::temp_dir().join(format!(
            "rspatmin-wordlist-test-{}",
            std::process::id()
        ));
        let folder = root.join("7");
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join("0.txt"), utf16le(".*cat.*\n^dog$\n", true)).unwrap();
        fs::write(folder.join("common.txt"), utf16le(".*cat.*\n", true)).unwrap();

        let words = load_version(&root, 7).unwrap();
        assert_eq!(words.len(), 2);
        let cat = &words[".*cat.*"];
        assert!(cat.contains(&Entry { language: Language::Jja, version: 7 }));
        assert!(cat.contains(&Entry { language: Language::Common, version: 7 }));
        assert_eq!(words["^dog$"].len(), 1);

        assert_eq!(latest_version(&root).unwrap(), 7);
        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_unrecognized_file_is_fatal() {
        let root = std::env::temp_dir().join(format!(
            "rspatmin-wordlist-bad-{}",
            std::process::id()
        ));
        let folder = root.join("3");
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join("mystery.txt"), utf16le("x\n", true)).unwrap();
        assert!(load_version(&root, 3).is_err());
        fs::remove_dir_all(&root).unwrap();
    }
}
