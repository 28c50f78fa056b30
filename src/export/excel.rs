//! Excel生成（CLI版）
//!
//! 共通ライブラリの excel_core でバッファを作り、ファイルに書き出す。

use crate::error::{NicheError, Result};
use std::path::Path;
use tshirt_niche_common::export::excel_core::generate_excel_buffer;
use tshirt_niche_common::{Analysis, AnalysisReport};

pub fn generate_excel(
    analysis: &Analysis,
    report: &AnalysisReport,
    winning_only: bool,
    output_path: &Path,
) -> Result<()> {
    let rows = analysis.export_rows(winning_only);
    let buffer = generate_excel_buffer(
        analysis.headers(),
        rows,
        &report.top_niches,
        &report.recommendations,
    )?;

    std::fs::write(output_path, buffer)
        .map_err(|e| NicheError::ExcelGeneration(format!("ファイル保存エラー: {}", e)))?;

    tracing::info!(path = %output_path.display(), rows = rows.len(), "Excel出力");
    Ok(())
}
