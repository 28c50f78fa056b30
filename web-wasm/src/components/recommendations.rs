//! 推奨事項

use leptos::prelude::*;
use tshirt_niche_common::Recommendation;

#[component]
pub fn Recommendations(recommendations: Vec<Recommendation>) -> impl IntoView {
    view! {
        <div class="card">
            <h2>"📝 Recommendations"</h2>
            <div class="recommendation-list">
                {recommendations
                    .into_iter()
                    .map(|rec| {
                        let examples = rec.examples.map(|examples| {
                            view! {
                                <div class="recommendation-examples">
                                    <strong>"Examples:"</strong>
                                    {format!(" {}", examples.join(", "))}
                                </div>
                            }
                        });
                        view! {
                            <div class="recommendation-item">
                                <div class="recommendation-header">
                                    <div class="recommendation-icon">{rec.icon}</div>
                                    <div class="recommendation-title">{rec.title}</div>
                                </div>
                                <div class="recommendation-description">{rec.description}</div>
                                {examples}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
