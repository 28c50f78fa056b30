//! ニッチ分類
//!
//! カテゴリごとにキーワードの部分一致数を数え、最多のカテゴリを返す。
//! 同数の場合は分類表の宣言順で先に現れたものを採用する。

use crate::fields::{combined_text, FILTER_TEXT_COLUMNS};
use crate::terms::{GENERAL, TAXONOMY};
use crate::types::Row;

/// カテゴリごとの一致数（宣言順）
pub fn category_hits(text: &str) -> Vec<(&'static str, usize)> {
    TAXONOMY
        .iter()
        .map(|category| {
            let hits = category
                .keywords
                .iter()
                .filter(|keyword| text.contains(*keyword))
                .count();
            (category.name, hits)
        })
        .collect()
}

/// 正規化済みテキストを分類
pub fn classify_text(text: &str) -> &'static str {
    let mut best: Option<(&'static str, usize)> = None;

    for (name, hits) in category_hits(text) {
        if hits == 0 {
            continue;
        }
        // 厳密に大きい場合のみ更新（先勝ち）
        if best.map_or(true, |(_, top)| hits > top) {
            best = Some((name, hits));
        }
    }

    best.map(|(name, _)| name).unwrap_or(GENERAL)
}

/// 行のニッチカテゴリ
pub fn classify(row: &Row) -> &'static str {
    classify_text(&combined_text(row, FILTER_TEXT_COLUMNS))
}
