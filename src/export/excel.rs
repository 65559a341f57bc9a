//! Excel出力
//!
//! - summary シート: 統計名と値
//! - records シート: 画像ごとの照合結果と犬判定

use super::EvaluationReport;
use crate::error::{EvalError, Result};
use pet_eval_common::StatValue;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook};
use std::path::Path;

const RECORD_HEADERS: &[&str] = &[
    "file name",
    "truth label",
    "model label",
    "match",
    "is dog",
    "model says dog",
];

pub fn generate_excel(report: &EvaluationReport, output_path: &Path) -> Result<()> {
    let buffer = generate_excel_buffer(report)
        .map_err(EvalError::ExcelGeneration)?;
    std::fs::write(output_path, buffer)?;
    Ok(())
}

/// Excelをバッファに生成
pub fn generate_excel_buffer(report: &EvaluationReport) -> std::result::Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let percent_format = Format::new().set_num_format("0.0");

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("summary")
            .map_err(|e| format!("シート名設定エラー: {}", e))?;
        sheet.set_column_width(0, 22)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;

        sheet.write_string_with_format(0, 0, "model", &header_format)
            .map_err(|e| format!("書き込みエラー: {}", e))?;
        sheet.write_string(0, 1, &report.arch)
            .map_err(|e| format!("書き込みエラー: {}", e))?;
        sheet.write_string_with_format(1, 0, "generated at", &header_format)
            .map_err(|e| format!("書き込みエラー: {}", e))?;
        sheet.write_string(1, 1, &report.generated_at)
            .map_err(|e| format!("書き込みエラー: {}", e))?;

        for (i, (name, value)) in report.stats.entries().into_iter().enumerate() {
            let row = i as u32 + 3;
            sheet.write_string_with_format(row, 0, name, &header_format)
                .map_err(|e| format!("書き込みエラー: {}", e))?;
            match value {
                StatValue::Count(n) => sheet.write_number(row, 1, n as f64),
                StatValue::Percent(p) => sheet.write_number_with_format(row, 1, p, &percent_format),
            }
            .map_err(|e| format!("書き込みエラー: {}", e))?;
        }
    }

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("records")
            .map_err(|e| format!("シート名設定エラー: {}", e))?;

        for (col, header) in RECORD_HEADERS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *header, &header_format)
                .map_err(|e| format!("ヘッダー書き込みエラー: {}", e))?;
        }
        sheet.set_column_width(0, 30)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
        sheet.set_column_width(2, 40)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;

        for (i, record) in report.records.iter().enumerate() {
            let row = i as u32 + 1;
            sheet.write_string(row, 0, &record.file_name)
                .map_err(|e| format!("書き込みエラー: {}", e))?;
            sheet.write_string(row, 1, &record.truth_label)
                .map_err(|e| format!("書き込みエラー: {}", e))?;
            sheet.write_string(row, 2, &record.model_label)
                .map_err(|e| format!("書き込みエラー: {}", e))?;
            sheet.write_boolean(row, 3, record.label_match)
                .map_err(|e| format!("書き込みエラー: {}", e))?;

            // 犬判定前のレコードは空欄
            if let Some(status) = record.dog_status {
                sheet.write_boolean(row, 4, status.is_dog)
                    .map_err(|e| format!("書き込みエラー: {}", e))?;
                sheet.write_boolean(row, 5, status.model_says_dog)
                    .map_err(|e| format!("書き込みエラー: {}", e))?;
            }
        }
    }

    // バッファに書き出し
    workbook.save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}
