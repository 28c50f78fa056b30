//! 著作権・商標フィルタ
//!
//! テキスト列のいずれかに除外語が部分一致すれば除外する。
//! 単語境界は見ない（"disneyland" は "disney" に一致）。

use crate::fields::{clean_text, FILTER_TEXT_COLUMNS};
use crate::terms::BLOCKED_TERMS;
use crate::types::Row;

/// テキストに除外語が含まれるか
pub fn contains_blocked_term(text: &str) -> bool {
    let text = clean_text(text);
    if text.is_empty() {
        return false;
    }
    BLOCKED_TERMS.iter().any(|term| text.contains(term))
}

/// 行が除外対象か
pub fn is_blocked(row: &Row) -> bool {
    FILTER_TEXT_COLUMNS
        .iter()
        .filter_map(|col| row.get(col))
        .any(contains_blocked_term)
}

/// 最初に一致した除外語（ログ用）
pub fn matched_term(row: &Row) -> Option<&'static str> {
    FILTER_TEXT_COLUMNS
        .iter()
        .filter_map(|col| row.get(col))
        .map(clean_text)
        .find_map(|text| BLOCKED_TERMS.iter().copied().find(|term| text.contains(term)))
}
