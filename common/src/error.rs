//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// ファイル名が `.csv` で終わらない
    #[error("Please upload a CSV file: {0}")]
    NotCsv(String),

    /// 解析済みの行がない状態でエクスポートしようとした
    #[error("No data to download. Please analyze some data first.")]
    EmptyExport,

    #[error("Excel error: {0}")]
    Excel(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
