//! 評価結果のコンソール出力

use pet_eval_common::{ImageRecord, RecordSet, StatValue, SummaryStats};
use serde::Serialize;
use std::time::Duration;

/// 誤分類の一覧に含める項目
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Misclassified {
    pub file_name: String,
    pub truth_label: String,
    pub model_label: String,
}

impl From<&ImageRecord> for Misclassified {
    fn from(record: &ImageRecord) -> Self {
        Self {
            file_name: record.file_name.clone(),
            truth_label: record.truth_label.clone(),
            model_label: record.model_label.clone(),
        }
    }
}

/// 犬種を誤分類したレコード（一致あり・正解は犬・モデルは非犬）
pub fn incorrect_breeds(records: &RecordSet) -> Vec<Misclassified> {
    records
        .iter()
        .filter(|r| r.is_incorrect_breed())
        .map(Misclassified::from)
        .collect()
}

/// 犬/非犬を誤分類したレコード
pub fn incorrect_dogs(records: &RecordSet) -> Vec<Misclassified> {
    records
        .iter()
        .filter(|r| r.is_incorrect_dog())
        .map(Misclassified::from)
        .collect()
}

/// 表示オプション
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub print_incorrect_breeds: bool,
    pub print_incorrect_dogs: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            print_incorrect_breeds: true,
            print_incorrect_dogs: true,
        }
    }
}

/// レポート文字列を生成
pub fn render_report(
    stats: &SummaryStats,
    records: &RecordSet,
    arch: &str,
    options: ReportOptions,
) -> String {
    let c = &stats.counts;
    let mut out = format!(
        "----------- RESULT STATS FOR {} MODEL -----------\n\n",
        arch.to_uppercase()
    );
    out.push_str(&format!("  Total images:           {}\n", c.n_images));
    out.push_str(&format!("  Dog images:             {}\n", c.n_dog_images));
    out.push_str(&format!("  Correct non-dog images: {}\n", c.n_nondog_img));
    out.push_str(&format!("  Total matches:          {}\n", c.n_matches));
    out.push_str("\n  Percentages:\n");

    for (name, value) in stats.entries() {
        if let StatValue::Percent(_) = value {
            out.push_str(&format!("    {:<20} {}\n", name, value));
        }
    }

    if options.print_incorrect_breeds && stats.has_incorrect_breeds() {
        render_list(&mut out, "Incorrect breeds", &incorrect_breeds(records));
    }

    if options.print_incorrect_dogs && stats.has_incorrect_dogs() {
        render_list(&mut out, "Incorrect dogs", &incorrect_dogs(records));
    }

    out
}

fn render_list(out: &mut String, title: &str, items: &[Misclassified]) {
    out.push_str(&format!("\n----- {} -----\n", title));
    for item in items {
        out.push_str(&format!(
            "  {}: label \"{}\" classified as \"{}\"\n",
            item.file_name, item.truth_label, item.model_label
        ));
    }
}

/// 経過時間を h:mm:ss 形式に
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}
