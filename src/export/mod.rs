pub mod json;
pub mod excel;

use crate::report::{incorrect_breeds, incorrect_dogs, Misclassified};
use pet_eval_common::{ImageRecord, RecordSet, SummaryStats};
use serde::Serialize;

/// ファイル出力用の評価結果一式
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    /// 生成日時（ローカル時刻）
    pub generated_at: String,
    pub arch: String,
    pub stats: SummaryStats,
    pub records: Vec<ImageRecord>,
    pub incorrect_breeds: Vec<Misclassified>,
    pub incorrect_dogs: Vec<Misclassified>,
}

impl EvaluationReport {
    pub fn new(arch: &str, stats: SummaryStats, records: &RecordSet) -> Self {
        Self {
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            arch: arch.to_string(),
            stats,
            records: records.as_slice().to_vec(),
            incorrect_breeds: incorrect_breeds(records),
            incorrect_dogs: incorrect_dogs(records),
        }
    }
}
