//! T-shirt Niche CLI
//!
//! 商品リストCSVを読み込み、除外語フィルタ・スコア算出・ニッチ分類を行い、
//! レポート表示と `tshirt_analysis_results.csv` 等への出力を行う。

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod prompt;
pub mod report;

use crate::error::{NicheError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tshirt_niche_common::{analyze_with_progress, ensure_csv_name, read_dataset, Analysis};

/// CSVファイルを読み込んで解析する（進捗バー付き）
pub fn analyze_file(path: &Path) -> Result<Analysis> {
    if !path.exists() {
        return Err(NicheError::FileNotFound(path.display().to_string()));
    }
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    ensure_csv_name(&file_name)?;

    let file = File::open(path)?;
    let dataset = read_dataset(BufReader::new(file))?;
    tracing::info!(path = %path.display(), rows = dataset.len(), "CSV読み込み");

    let pb = ProgressBar::new(dataset.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message("スコア算出中");

    let analysis = analyze_with_progress(&dataset, |done| pb.set_position(done as u64));
    pb.finish_and_clear();

    tracing::info!(
        total = analysis.total_items(),
        filtered = analysis.filtered_items(),
        winning = analysis.winning().len(),
        "解析完了"
    );
    Ok(analysis)
}
