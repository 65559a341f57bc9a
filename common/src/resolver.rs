//! 犬判定モジュール
//!
//! 正解ラベル・モデルラベルをそれぞれ犬名リストと照合する。

use crate::registry::DogNameRegistry;
use crate::types::{DogStatus, ImageRecord, RecordSet};

/// レコード1件の犬判定（純関数）
pub fn dog_status_for(record: &ImageRecord, registry: &DogNameRegistry) -> DogStatus {
    DogStatus {
        is_dog: registry.contains(&record.truth_label),
        model_says_dog: registry.contains(&record.model_label),
    }
}

/// 全レコードに犬判定を設定
///
/// 何度実行しても結果は同じ。犬名リストは変更しない。
pub fn resolve_dog_status(records: &mut RecordSet, registry: &DogNameRegistry) {
    for record in records.iter_mut() {
        record.dog_status = Some(dog_status_for(record, registry));
    }
}
