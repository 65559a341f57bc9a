//! 評価レコードの型定義
//!
//! - ImageRecord: 画像1枚分の照合結果
//! - DogStatus: 犬判定（正解側・モデル側）
//! - RecordSet: ファイル名で一意なレコード集合（挿入順を保持）

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 犬判定の結果
///
/// 正解側とモデル側は常に同時に設定される。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DogStatus {
    /// 正解ラベルが犬名リストに含まれる
    pub is_dog: bool,
    /// モデルラベルが犬名リストに含まれる
    pub model_says_dog: bool,
}

/// 画像1枚分の評価レコード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub file_name: String,

    /// ファイル名から抽出した正解ラベル
    pub truth_label: String,

    /// 分類器の出力（正規化済み）
    pub model_label: String,

    /// 正解ラベルがモデルラベルに語として含まれる
    pub label_match: bool,

    /// 犬判定パス実行前は None
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dog_status: Option<DogStatus>,
}

impl ImageRecord {
    pub fn new(
        file_name: impl Into<String>,
        truth_label: impl Into<String>,
        model_label: impl Into<String>,
        label_match: bool,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            truth_label: truth_label.into(),
            model_label: model_label.into(),
            label_match,
            dog_status: None,
        }
    }

    pub fn is_dog(&self) -> Option<bool> {
        self.dog_status.map(|s| s.is_dog)
    }

    pub fn model_says_dog(&self) -> Option<bool> {
        self.dog_status.map(|s| s.model_says_dog)
    }

    /// 犬種の誤分類（一致あり・正解は犬・モデルは犬と判定せず）
    pub fn is_incorrect_breed(&self) -> bool {
        matches!(
            self.dog_status,
            Some(DogStatus { is_dog: true, model_says_dog: false }) if self.label_match
        )
    }

    /// 犬/非犬の誤分類（正解とモデルで犬判定が食い違う）
    pub fn is_incorrect_dog(&self) -> bool {
        self.dog_status
            .map(|s| s.is_dog != s.model_says_dog)
            .unwrap_or(false)
    }
}

/// ファイル名で一意なレコード集合
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    records: Vec<ImageRecord>,
    names: HashSet<String>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// レコードを追加
    ///
    /// 同名ファイルが既にあれば警告を出して先勝ちとし、false を返す。
    pub fn insert(&mut self, record: ImageRecord) -> bool {
        if self.names.contains(&record.file_name) {
            tracing::warn!(file = %record.file_name, "duplicate file name, keeping first entry");
            return false;
        }
        self.names.insert(record.file_name.clone());
        self.records.push(record);
        true
    }

    pub fn get(&self, file_name: &str) -> Option<&ImageRecord> {
        self.records.iter().find(|r| r.file_name == file_name)
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.names.contains(file_name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageRecord> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, ImageRecord> {
        self.records.iter_mut()
    }

    pub fn as_slice(&self) -> &[ImageRecord] {
        &self.records
    }

    /// レコード件数
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<ImageRecord> for RecordSet {
    fn from_iter<I: IntoIterator<Item = ImageRecord>>(iter: I) -> Self {
        let mut set = Self::new();
        for record in iter {
            set.insert(record);
        }
        set
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a ImageRecord;
    type IntoIter = std::slice::Iter<'a, ImageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
