//! 分類パイプライン
//!
//! 画像ごとに分類器を呼び、正解ラベルとの照合結果をレコードにする。
//! 分類器が失敗した時点で実行全体を中断する。

use crate::classifier::cache::{filter_cached_images, CacheFile};
use crate::classifier::Classifier;
use crate::error::{EvalError, Result};
use crate::scanner::ImageInfo;
use indicatif::{ProgressBar, ProgressStyle};
use pet_eval_common::{
    extract_truth_label, labels_match, normalize_model_label, ImageRecord, RecordSet,
};
use rayon::prelude::*;
use std::path::Path;

/// パイプラインの実行オプション
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// 分類器に渡すアーキテクチャ名
    pub arch: String,
    /// 並列数（1なら逐次）
    pub jobs: usize,
    /// 進捗バーを表示する
    pub show_progress: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            arch: "vgg".into(),
            jobs: 1,
            show_progress: false,
        }
    }
}

/// 画像一覧から (ファイル名, 正解ラベル) を作る
pub fn truth_labels(images: &[ImageInfo]) -> Vec<(String, String)> {
    images
        .iter()
        .map(|img| (img.file_name.clone(), extract_truth_label(&img.file_name)))
        .collect()
}

/// 1枚分のレコードを作る
pub fn build_record(file_name: &str, truth_label: &str, raw_model_label: &str) -> ImageRecord {
    let model_label = normalize_model_label(raw_model_label);
    let label_match = labels_match(&model_label, truth_label);
    ImageRecord::new(file_name, truth_label, model_label, label_match)
}

/// 全画像を分類してレコード集合を作る
pub fn classify_images(
    images: &[ImageInfo],
    classifier: &dyn Classifier,
    options: &PipelineOptions,
) -> Result<RecordSet> {
    let indices: Vec<usize> = (0..images.len()).collect();
    let labels = run_classifier(images, &indices, classifier, options)?;
    Ok(assemble(images, labels.into_iter().zip(indices)))
}

/// キャッシュを使って分類（未キャッシュ分のみ分類器を呼ぶ）
pub fn classify_images_with_cache(
    images: &[ImageInfo],
    folder: &Path,
    classifier: &dyn Classifier,
    options: &PipelineOptions,
) -> Result<RecordSet> {
    let mut cache = CacheFile::load(folder);
    let (cached, uncached) = filter_cached_images(images, &options.arch, &cache);

    tracing::info!(cached = cached.len(), uncached = uncached.len(), "cache lookup");

    let indices: Vec<usize> = uncached.iter().map(|(idx, _)| *idx).collect();
    let fresh = run_classifier(images, &indices, classifier, options)?;

    for ((idx, key), label) in uncached.iter().zip(&fresh) {
        if key.is_empty() {
            continue;
        }
        cache.insert(
            key.clone(),
            images[*idx].file_name.clone(),
            options.arch.clone(),
            label.clone(),
        );
    }
    if !fresh.is_empty() {
        cache.save(folder)?;
    }

    let mut labelled: Vec<(String, usize)> = cached
        .into_iter()
        .map(|(idx, label)| (label, idx))
        .chain(fresh.into_iter().zip(indices))
        .collect();
    // 一覧の順序に戻す
    labelled.sort_by_key(|(_, idx)| *idx);

    Ok(assemble(images, labelled))
}

// 指定インデックスの画像を分類し、同じ順序でラベルを返す
fn run_classifier(
    images: &[ImageInfo],
    indices: &[usize],
    classifier: &dyn Classifier,
    options: &PipelineOptions,
) -> Result<Vec<String>> {
    let progress = progress_bar(indices.len() as u64, options.show_progress);

    let classify_one = |idx: &usize| -> Result<String> {
        let img = &images[*idx];
        let label = classifier.classify(&img.path, &options.arch)?;
        tracing::debug!(file = %img.file_name, label = %label, "classified");
        progress.inc(1);
        Ok(label)
    };

    let labels = if options.jobs > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.jobs)
            .build()
            .map_err(|e| EvalError::Config(format!("スレッドプール生成エラー: {}", e)))?;
        pool.install(|| indices.par_iter().map(classify_one).collect::<Result<Vec<_>>>())
    } else {
        indices.iter().map(classify_one).collect::<Result<Vec<_>>>()
    };

    progress.finish_and_clear();
    labels
}

// 一覧順に (生ラベル, 画像インデックス) からレコードを組み立てる
fn assemble<I>(images: &[ImageInfo], labelled: I) -> RecordSet
where
    I: IntoIterator<Item = (String, usize)>,
{
    let mut records = RecordSet::new();
    for (raw_label, idx) in labelled {
        let file_name = &images[idx].file_name;
        let truth_label = extract_truth_label(file_name);
        records.insert(build_record(file_name, &truth_label, &raw_label));
    }
    records
}

fn progress_bar(len: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::with_template("  {bar:40} {pos}/{len} {msg}") {
        bar.set_style(style);
    }
    bar
}
