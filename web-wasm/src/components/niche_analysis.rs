//! ニッチ分析・所見

use leptos::prelude::*;
use tshirt_niche_common::format::{format_decimal, format_number};
use tshirt_niche_common::{NicheAnalysis, NicheInsight};

fn metric(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="metric">
            <span class="metric-label">{label}</span>
            <span class="metric-value">{value}</span>
        </div>
    }
}

#[component]
pub fn NicheAnalysisPanel(analysis: Vec<NicheAnalysis>, insights: Vec<NicheInsight>) -> impl IntoView {
    view! {
        <div class="card">
            <h2>"🔍 Niche Analysis"</h2>
            <div class="analysis-list">
                {analysis
                    .into_iter()
                    .map(|data| {
                        view! {
                            <div class="analysis-item">
                                <div class="analysis-header">
                                    <div class="analysis-niche">{data.niche}</div>
                                    <div class="analysis-count">{format!("{} items", data.count)}</div>
                                </div>
                                <div class="analysis-metrics">
                                    {metric("Avg Score:", format_decimal(data.avg_score))}
                                    {data.avg_rank.map(|v| metric("Avg BSR:", format_number(v)))}
                                    {data.avg_rating.map(|v| metric("Avg Rating:", format_decimal(v)))}
                                    {data.avg_reviews.map(|v| metric("Avg Reviews:", format_number(v)))}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="insight-list">
                {insights
                    .into_iter()
                    .map(|insight| {
                        let level_class = format!("insight-level {}", insight.level.to_string().to_lowercase());
                        view! {
                            <div class="insight-item">
                                <div class="insight-header">
                                    <span class="insight-niche">{insight.niche}</span>
                                    <span class=level_class>{insight.level.to_string()}</span>
                                    <span class="insight-score">{insight.opportunity_score}</span>
                                </div>
                                <ul class="insight-signals">
                                    {insight
                                        .signals
                                        .into_iter()
                                        .map(|signal| {
                                            let mark = if signal.is_positive() { "✔" } else { "⚠" };
                                            view! { <li>{format!("{} {}", mark, signal)}</li> }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
