//! 論理フィールドの解決
//!
//! 列名はCSVごとに異なるため、概念ごとに候補列名を優先順に並べ、
//! 最初に解決できた値を使う。

use crate::types::Row;

/// 除外判定・ニッチ分類に使うテキスト列
pub const FILTER_TEXT_COLUMNS: &[&str] = &["title", "description", "keywords", "niche", "design_idea"];

/// スコア計算に使うテキスト列（商品名系を含む）
pub const SCORE_TEXT_COLUMNS: &[&str] = &[
    "title", "description", "keywords", "niche", "design_idea", "product_title", "name",
];

pub const RANK_COLUMNS: &[&str] = &["bsr", "best_seller_rank", "rank", "amazon_bsr", "bestseller_rank"];

pub const RATING_COLUMNS: &[&str] = &["rating", "star_rating", "stars", "average_rating", "customer_rating"];

pub const REVIEW_COLUMNS: &[&str] = &["reviews", "review_count", "total_reviews", "num_reviews", "number_of_reviews"];

/// 小文字化＋前後空白除去
pub fn clean_text(value: &str) -> String {
    value.trim().to_lowercase()
}

/// 指定列を正規化し、空でないものを空白区切りで連結
pub fn combined_text(row: &Row, columns: &[&str]) -> String {
    columns
        .iter()
        .filter_map(|col| row.get(col))
        .map(clean_text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// 数値文字列を解釈する。`strip_separators` が真なら桁区切りのカンマを除く
///
/// 空文字・非数値・非有限値は None
pub fn parse_number(raw: &str, strip_separators: bool) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value = if strip_separators {
        trimmed.replace(',', "").parse::<f64>().ok()?
    } else {
        trimmed.parse::<f64>().ok()?
    };
    value.is_finite().then_some(value)
}

/// 候補列のうち最初に数値として解釈できた値
pub fn first_numeric(row: &Row, columns: &[&str], strip_separators: bool) -> Option<f64> {
    columns
        .iter()
        .filter_map(|col| row.get(col))
        .find_map(|raw| parse_number(raw, strip_separators))
}

/// 候補列のうち最初に正の数値として解釈できた値
pub fn first_positive(row: &Row, columns: &[&str], strip_separators: bool) -> Option<f64> {
    columns
        .iter()
        .filter_map(|col| row.get(col))
        .filter_map(|raw| parse_number(raw, strip_separators))
        .find(|value| *value > 0.0)
}

/// ランキング（BSR）。正の値のみ
pub fn rank_value(row: &Row) -> Option<f64> {
    first_positive(row, RANK_COLUMNS, true)
}

/// 評価。正の値のみ
pub fn rating_value(row: &Row) -> Option<f64> {
    first_positive(row, RATING_COLUMNS, false)
}

/// レビュー数。正の値のみ
pub fn review_value(row: &Row) -> Option<f64> {
    first_positive(row, REVIEW_COLUMNS, true)
}

fn first_non_empty<'a>(row: &'a Row, columns: &[&str]) -> Option<&'a str> {
    columns
        .iter()
        .filter_map(|col| row.get(col))
        .find(|value| !value.is_empty())
}

/// 推奨の例示に使うタイトル（title → product_title → "Untitled"）
pub fn example_title(row: &Row) -> String {
    first_non_empty(row, &["title", "product_title"])
        .unwrap_or("Untitled")
        .to_string()
}

/// 一覧表示用タイトル（title → product_title → name → "No title"）
pub fn display_title(row: &Row) -> &str {
    first_non_empty(row, &["title", "product_title", "name"]).unwrap_or("No title")
}

/// 一覧表示用説明（description → design_idea → "No description"）
pub fn display_description(row: &Row) -> &str {
    first_non_empty(row, &["description", "design_idea"]).unwrap_or("No description")
}
