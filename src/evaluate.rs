//! 評価の一括実行
//!
//! スキャン → 分類・照合 → 犬判定 → 集計 を順に実行する。

use crate::classifier::Classifier;
use crate::error::{EvalError, Result};
use crate::pipeline::{classify_images, classify_images_with_cache, PipelineOptions};
use crate::scanner;
use pet_eval_common::{resolve_dog_status, DogNameRegistry, RecordSet, SummaryStats};
use std::path::Path;

/// 評価結果
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub records: RecordSet,
    pub stats: SummaryStats,
}

/// 犬名リストと分類済みレコードから統計を算出
pub fn summarize(mut records: RecordSet, registry: &DogNameRegistry) -> Result<Evaluation> {
    resolve_dog_status(&mut records, registry);
    let stats = SummaryStats::compute(&records)?;
    Ok(Evaluation { records, stats })
}

/// フォルダ内の画像を評価
pub fn evaluate_folder(
    folder: &Path,
    dog_file: &Path,
    classifier: &dyn Classifier,
    options: &PipelineOptions,
    use_cache: bool,
) -> Result<Evaluation> {
    if !dog_file.exists() {
        return Err(EvalError::FileNotFound(dog_file.display().to_string()));
    }

    let images = scanner::scan_folder(folder)?;
    if images.is_empty() {
        return Err(EvalError::NoImagesFound(folder.display().to_string()));
    }
    tracing::info!(count = images.len(), folder = %folder.display(), "images found");

    let records = if use_cache {
        classify_images_with_cache(&images, folder, classifier, options)?
    } else {
        classify_images(&images, classifier, options)?
    };

    // 照合前に全件読み込む
    let registry = DogNameRegistry::from_file(dog_file)?;
    tracing::info!(names = registry.len(), "dog names loaded");

    summarize(records, &registry)
}
