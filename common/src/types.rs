//! 行データの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Row: CSVの1行（列名→値、列順を保持）
//! - Dataset: ヘッダーと行の集合（アップロード1回分）
//! - ScoredRow: Row + winning_score + niche_category（生成後は不変）

use serde::ser::{Serialize, Serializer};

/// CSVの1行
///
/// スキーマは強制しない。論理フィールドは候補列名を順に引いて解決する
/// （`crate::fields` 参照）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: Vec<(String, String)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// (列名, 値) の並びから生成。同名の列は後勝ち
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut row = Self::new();
        for (column, value) in pairs {
            row.insert(column, value);
        }
        row
    }

    /// 列の値を取得（列がなければ None、空文字はそのまま返す）
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// 列を設定。既存列は位置を保ったまま上書き、なければ末尾に追加
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((column, value)),
        }
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.fields.iter().map(|(k, v)| (k, v)))
    }
}

/// アップロード1回分のデータ
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// スコア・ニッチ付きの行
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ScoredRow {
    #[serde(flatten)]
    row: Row,
    winning_score: u32,
    niche_category: &'static str,
}

impl ScoredRow {
    pub fn new(row: Row, winning_score: u32, niche_category: &'static str) -> Self {
        Self { row, winning_score, niche_category }
    }

    pub fn row(&self) -> &Row {
        &self.row
    }

    pub fn winning_score(&self) -> u32 {
        self.winning_score
    }

    pub fn niche_category(&self) -> &'static str {
        self.niche_category
    }

    /// 元の列を取得（派生列は含まない）
    pub fn get(&self, column: &str) -> Option<&str> {
        self.row.get(column)
    }
}
