//! 分類結果キャッシュモジュール
//!
//! 画像のSHA-256ハッシュとアーキテクチャ名をキーにして分類器の出力を保存し、
//! 同じ画像の再分類をスキップする。

use crate::error::Result;
use crate::scanner::ImageInfo;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const CACHE_FILE_NAME: &str = ".classify-cache.json";

/// キャッシュファイルの構造
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheFile {
    /// バージョン（互換性チェック用）
    version: u32,
    /// キー → 分類結果のマップ
    entries: HashMap<String, CacheEntry>,
}

/// キャッシュエントリ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// ファイル名
    pub file_name: String,
    pub arch: String,
    /// 分類器の生出力
    pub label: String,
}

impl CacheFile {
    const CURRENT_VERSION: u32 = 1;

    pub fn cache_path(folder: &Path) -> PathBuf {
        folder.join(CACHE_FILE_NAME)
    }

    /// キャッシュファイルを読み込み（壊れていれば空から作り直す）
    pub fn load(folder: &Path) -> Self {
        let cache_path = Self::cache_path(folder);
        if !cache_path.exists() {
            return Self::default();
        }

        let file = match File::open(&cache_path) {
            Ok(f) => f,
            Err(_) => return Self::default(),
        };

        let reader = BufReader::new(file);
        match serde_json::from_reader::<_, CacheFile>(reader) {
            Ok(cache) if cache.version == Self::CURRENT_VERSION => cache,
            Ok(_) => {
                tracing::warn!(path = %cache_path.display(), "cache version mismatch, rebuilding");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(path = %cache_path.display(), error = %e, "unreadable cache, rebuilding");
                Self::default()
            }
        }
    }

    /// キャッシュファイルを保存
    pub fn save(&self, folder: &Path) -> Result<()> {
        let file = File::create(Self::cache_path(folder))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// キャッシュファイルを削除（存在しなければ false）
    pub fn clear(folder: &Path) -> Result<bool> {
        let cache_path = Self::cache_path(folder);
        if cache_path.exists() {
            std::fs::remove_file(cache_path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// キャッシュをルックアップ
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|e| e.label.as_str())
    }

    /// キャッシュに追加
    pub fn insert(&mut self, key: String, file_name: String, arch: String, label: String) {
        self.entries.insert(key, CacheEntry {
            file_name,
            arch,
            label,
        });
    }

    /// キャッシュ件数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CacheFile {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            entries: HashMap::new(),
        }
    }
}

/// 画像ファイルのハッシュを計算（SHA-256）
pub fn compute_file_hash(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    std::io::copy(&mut file, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

/// キャッシュキー（同じ画像でもアーキテクチャが違えば別エントリ）
pub fn cache_key(hash: &str, arch: &str) -> String {
    format!("{}:{}", hash, arch)
}

/// キャッシュ済みとそうでない画像に振り分け
///
/// - キャッシュにある画像は (インデックス, ラベル)
/// - ない画像は (インデックス, キー)。ハッシュ計算に失敗した画像のキーは空文字列
pub fn filter_cached_images(
    images: &[ImageInfo],
    arch: &str,
    cache: &CacheFile,
) -> (Vec<(usize, String)>, Vec<(usize, String)>) {
    let mut cached = Vec::new();
    let mut uncached = Vec::new();

    for (idx, img) in images.iter().enumerate() {
        let hash = match compute_file_hash(&img.path) {
            Ok(h) => h,
            Err(_) => {
                // ハッシュ計算失敗時は未キャッシュとして扱う
                uncached.push((idx, String::new()));
                continue;
            }
        };

        let key = cache_key(&hash, arch);
        if let Some(label) = cache.get(&key) {
            cached.push((idx, label.to_string()));
        } else {
            uncached.push((idx, key));
        }
    }

    (cached, uncached)
}
