//! サマリー表示コンポーネント

use leptos::prelude::*;
use tshirt_niche_common::format::format_decimal;
use tshirt_niche_common::Summary;

#[component]
pub fn StatsPanel(summary: Summary) -> impl IntoView {
    let avg = if summary.winning_items > 0 {
        format_decimal(summary.avg_score)
    } else {
        "0".to_string()
    };

    view! {
        <div class="stats-grid">
            <div class="stat-card">
                <div class="stat-value">{summary.total_items}</div>
                <div class="stat-label">"Total Items"</div>
            </div>
            <div class="stat-card">
                <div class="stat-value">{summary.winning_items}</div>
                <div class="stat-label">"Winning Ideas"</div>
            </div>
            <div class="stat-card">
                <div class="stat-value">{avg}</div>
                <div class="stat-label">"Avg Score"</div>
            </div>
            <div class="stat-card">
                <div class="stat-value">{summary.filtered_items}</div>
                <div class="stat-label">"Filtered Out"</div>
            </div>
        </div>
    }
}
