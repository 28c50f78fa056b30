pub mod csv;
pub mod excel;

use crate::cli::ExportFormat;
use crate::error::{NicheError, Result};
use std::path::{Path, PathBuf};
use tshirt_niche_common::{Analysis, EXPORT_FILE_NAME};

/// 既定ファイル名の拡張子なし部分
fn default_stem() -> &'static str {
    EXPORT_FILE_NAME.trim_end_matches(".csv")
}

fn is_directory_target(output: &Path) -> bool {
    output.is_dir() || output.extension().is_none()
}

/// 出力パスを決める（ディレクトリ指定なら既定ファイル名を付ける）
pub fn output_path_for_format(output: &Path, extension: &str) -> PathBuf {
    if is_directory_target(output) {
        output.join(format!("{}.{}", default_stem(), extension))
    } else {
        output.with_extension(extension)
    }
}

/// 出力したファイル
#[derive(Debug, Default)]
pub struct ExportedFiles {
    pub csv: Option<PathBuf>,
    pub xlsx: Option<PathBuf>,
}

pub fn export_results(
    analysis: &Analysis,
    format: ExportFormat,
    output: &Path,
    winning_only: bool,
) -> Result<ExportedFiles> {
    let rows = analysis.export_rows(winning_only);
    if rows.is_empty() {
        return Err(NicheError::EmptyExport);
    }

    if is_directory_target(output) {
        std::fs::create_dir_all(output)?;
    }

    let mut exported = ExportedFiles::default();

    if format.includes_csv() {
        let path = output_path_for_format(output, "csv");
        println!("- CSVを生成中... ({}行)", rows.len());
        csv::generate_csv(analysis.headers(), rows, &path)?;
        println!("✔ CSV出力: {}", path.display());
        exported.csv = Some(path);
    }

    if format.includes_xlsx() {
        let path = output_path_for_format(output, "xlsx");
        println!("- Excelを生成中...");
        let report = analysis.report();
        excel::generate_excel(analysis, &report, winning_only, &path)?;
        println!("✔ Excel出力: {}", path.display());
        exported.xlsx = Some(path);
    }

    Ok(exported)
}
