//! 表示用の整形ヘルパー（CLI/WASM共通）

/// トップアイデアのタイトル表示長
pub const TITLE_DISPLAY_LEN: usize = 60;

/// トップアイデアの説明表示長
pub const DESCRIPTION_DISPLAY_LEN: usize = 120;

/// 大きな数値を K / M 表記に丸める
pub fn format_number(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{}", value.round() as i64)
    }
}

/// 文字数で切り詰め、超過時は "..." を付ける
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// 小数1桁（平均値表示用）
pub fn format_decimal(value: f64) -> String {
    format!("{:.1}", value)
}
