use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tshirt-niche")]
#[command(about = "Tシャツ商品CSVのニッチ解析・勝ち候補抽出ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力（行ごとのスコア内訳など）
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// CSVを解析してレポートを表示
    Analyze {
        /// 入力CSVファイル（省略時は対話入力）
        input: Option<PathBuf>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 解析結果をCSV/Excelに出力
    Export {
        /// 入力CSVファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力ディレクトリまたはファイル
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (csv/xlsx/both)
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// 勝ち候補（スコア > 5）のみ出力
        #[arg(long)]
        winning_only: bool,
    },

    /// 解析・レポート表示・出力を一括実行
    Run {
        /// 入力CSVファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 既定の出力ディレクトリを設定
        #[arg(long)]
        set_output_dir: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Xlsx,
    Both,
}

impl ExportFormat {
    pub fn includes_csv(&self) -> bool {
        matches!(self, ExportFormat::Csv | ExportFormat::Both)
    }

    pub fn includes_xlsx(&self) -> bool {
        matches!(self, ExportFormat::Xlsx | ExportFormat::Both)
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "excel" | "xlsx" => Ok(ExportFormat::Xlsx),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use csv, xlsx, or both", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Xlsx => write!(f, "xlsx"),
            ExportFormat::Both => write!(f, "both"),
        }
    }
}
