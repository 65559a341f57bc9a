//! JSON出力

use super::EvaluationReport;
use crate::error::Result;
use std::path::Path;

pub fn write_json(report: &EvaluationReport, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(output_path, json)?;
    Ok(())
}
