use thiserror::Error;

#[derive(Error, Debug)]
pub enum NicheError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("CSVファイルを指定してください: {0}")]
    NotCsv(String),

    #[error("入力エラー: {0}")]
    Input(String),

    #[error("出力するデータがありません。先にCSVを解析してください")]
    EmptyExport,

    #[error("CSV出力エラー: {0}")]
    CsvExport(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(tshirt_niche_common::Error),
}

impl From<tshirt_niche_common::Error> for NicheError {
    fn from(err: tshirt_niche_common::Error) -> Self {
        use tshirt_niche_common::Error as E;
        match err {
            E::NotCsv(name) => NicheError::NotCsv(name),
            E::EmptyExport => NicheError::EmptyExport,
            E::Excel(msg) => NicheError::ExcelGeneration(msg),
            E::Io(e) => NicheError::Io(e),
            other => NicheError::Common(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, NicheError>;
