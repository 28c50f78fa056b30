use crate::cli::ExportFormat;
use crate::error::{NicheError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 出力先ディレクトリ（未設定ならカレント）
    pub default_output_dir: Option<PathBuf>,
    pub export_format: ExportFormat,
    /// 勝ち候補のみ出力する
    pub winning_only: bool,
    /// analyze の結果をJSONで表示する
    pub report_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_output_dir: None,
            export_format: ExportFormat::Csv,
            winning_only: false,
            report_json: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| NicheError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("tshirt-niche").join("config.json"))
    }

    /// 出力先（引数 > 設定 > カレント）
    pub fn output_dir(&self, requested: Option<PathBuf>) -> PathBuf {
        requested
            .or_else(|| self.default_output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn set_output_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.default_output_dir = Some(dir);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("none.json")).expect("設定読み込み失敗");
        assert!(config.default_output_dir.is_none());
        assert!(!config.winning_only);
        assert_eq!(config.export_format, ExportFormat::Csv);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            default_output_dir: Some(PathBuf::from("/tmp/out")),
            export_format: ExportFormat::Both,
            winning_only: true,
            report_json: false,
        };
        config.save_to(&path).expect("設定保存失敗");

        let loaded = Config::load_from(&path).expect("設定読み込み失敗");
        assert_eq!(loaded.default_output_dir, Some(PathBuf::from("/tmp/out")));
        assert_eq!(loaded.export_format, ExportFormat::Both);
        assert!(loaded.winning_only);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"winning_only": true}"#).expect("書き込み失敗");

        let config = Config::load_from(&path).expect("設定読み込み失敗");
        assert!(config.winning_only);
        assert_eq!(config.export_format, ExportFormat::Csv);
    }

    #[test]
    fn test_output_dir_priority() {
        let config = Config {
            default_output_dir: Some(PathBuf::from("saved")),
            ..Config::default()
        };
        assert_eq!(config.output_dir(Some(PathBuf::from("arg"))), PathBuf::from("arg"));
        assert_eq!(config.output_dir(None), PathBuf::from("saved"));
        assert_eq!(Config::default().output_dir(None), PathBuf::from("."));
    }
}
