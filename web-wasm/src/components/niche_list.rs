//! トップニッチ一覧

use leptos::prelude::*;
use tshirt_niche_common::format::format_decimal;
use tshirt_niche_common::NicheStats;

#[component]
pub fn NicheList(niches: Vec<NicheStats>) -> impl IntoView {
    view! {
        <div class="card">
            <h2>"🏆 Top Niches"</h2>
            <div class="niche-list">
                {niches
                    .into_iter()
                    .map(|item| {
                        view! {
                            <div class="niche-item">
                                <div>
                                    <div class="niche-name">{item.niche}</div>
                                    <div class="niche-stats">
                                        <span>{format!("{} items", item.count)}</span>
                                        <span>{format!("Avg: {}", format_decimal(item.avg_score))}</span>
                                        <span>{format!("Max: {}", format_decimal(f64::from(item.max_score)))}</span>
                                    </div>
                                </div>
                                <div class="niche-score">{item.opportunity_score}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
