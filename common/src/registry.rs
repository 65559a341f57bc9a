//! 犬名リストモジュール
//!
//! 1行1名のテキストを読み込み、小文字化した集合として保持する。

use crate::error::Result;
use std::collections::HashSet;

/// 犬名（犬種名）の集合
#[derive(Debug, Clone, Default)]
pub struct DogNameRegistry {
    names: HashSet<String>,
}

impl DogNameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// テキストから読み込み
    ///
    /// 各行の末尾空白を除去して小文字化する。空行は読み飛ばす。
    /// 重複行は警告のみで処理を続ける。
    pub fn from_text(text: &str) -> Self {
        let mut registry = Self::new();
        for line in text.lines() {
            let name = line.trim_end();
            if name.is_empty() {
                continue;
            }
            registry.insert(name);
        }
        registry
    }

    /// ファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_text(&content))
    }

    /// 名前を追加（重複時は警告して false）
    pub fn insert(&mut self, name: &str) -> bool {
        let name = name.trim_end().to_lowercase();
        if self.names.contains(&name) {
            tracing::warn!(name = %name, "duplicate dog name");
            return false;
        }
        self.names.insert(name);
        true
    }

    /// 完全一致で含まれるか（正規化済みの値を渡すこと）
    pub fn contains(&self, label: &str) -> bool {
        self.names.contains(label)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_name() {
        let registry = DogNameRegistry::from_text("beagle\n");
        assert!(registry.contains("beagle"));
        assert!(!registry.contains("cat"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_lowercase_and_trailing_whitespace() {
        let registry = DogNameRegistry::from_text("German Shepherd Dog  \r\nBasset, basset hound\t\n");
        assert!(registry.contains("german shepherd dog"));
        assert!(registry.contains("basset, basset hound"));
        assert!(!registry.contains("German Shepherd Dog"));
    }

    #[test]
    fn test_duplicates_are_not_errors() {
        let registry = DogNameRegistry::from_text("beagle\nBeagle\nbeagle \npug\n");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_insert_reports_duplicate() {
        let mut registry = DogNameRegistry::new();
        assert!(registry.insert("Pug"));
        assert!(!registry.insert("pug"));
    }

    #[test]
    fn test_empty_input() {
        assert!(DogNameRegistry::from_text("").is_empty());
        assert!(DogNameRegistry::from_text("\n\n").is_empty());
    }

    #[test]
    fn test_last_line_without_newline() {
        let registry = DogNameRegistry::from_text("beagle\npug");
        assert!(registry.contains("pug"));
    }
}
