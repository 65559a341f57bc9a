//! 保存済みラベル分類器
//!
//! 過去に分類器が出力したラベルを `{"ファイル名": "ラベル"}` 形式のJSONから読み、
//! モデルを再実行せずに評価をやり直すために使う。

use super::Classifier;
use crate::error::{EvalError, Result};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct LabelFileClassifier {
    labels: HashMap<String, String>,
}

impl LabelFileClassifier {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(EvalError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let labels: HashMap<String, String> = serde_json::from_str(json)
            .map_err(|e| EvalError::InvalidLabelFile(format!("JSONパースエラー: {}", e)))?;
        Ok(Self { labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Classifier for LabelFileClassifier {
    // アーキテクチャは保存時に決まっているので無視する
    fn classify(&self, image_path: &Path, _arch: &str) -> Result<String> {
        let file_name = image_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        self.labels
            .get(&file_name)
            .cloned()
            .ok_or_else(|| EvalError::Classifier(format!("ラベルが登録されていません: {}", file_name)))
    }
}
