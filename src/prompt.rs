//! 対話入力
//!
//! `analyze` でパスが省略された場合に入力CSVを尋ねる。

use crate::error::{NicheError, Result};
use dialoguer::Input;
use std::path::PathBuf;

/// 入力パスの検証（拡張子 `.csv` かつ存在すること）
pub fn validate_csv_path(raw: &str) -> std::result::Result<PathBuf, String> {
    let trimmed = raw.trim().trim_matches('"');
    if trimmed.is_empty() {
        return Err("パスを入力してください".to_string());
    }
    let path = PathBuf::from(trimmed);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    if !name.ends_with(".csv") {
        return Err(format!("CSVファイルを指定してください: {}", name));
    }
    if !path.exists() {
        return Err(format!("ファイルが見つかりません: {}", path.display()));
    }
    Ok(path)
}

/// 入力CSVのパスを対話で取得
pub fn ask_csv_path() -> Result<PathBuf> {
    let raw: String = Input::new()
        .with_prompt("解析するCSVファイル")
        .validate_with(|input: &String| validate_csv_path(input).map(|_| ()))
        .interact_text()
        .map_err(|e| NicheError::Input(e.to_string()))?;

    validate_csv_path(&raw).map_err(NicheError::Input)
}
