//! トップアイデア一覧

use leptos::prelude::*;
use tshirt_niche_common::format::{
    format_decimal, format_number, truncate_text, DESCRIPTION_DISPLAY_LEN, TITLE_DISPLAY_LEN,
};
use tshirt_niche_common::IdeaView;

#[component]
pub fn IdeaList(ideas: Vec<IdeaView>) -> impl IntoView {
    view! {
        <div class="card">
            <h2>"💡 Top Winning Ideas"</h2>
            <div class="idea-list">
                {ideas
                    .into_iter()
                    .map(|item| {
                        let bsr = item.rank.map(|v| view! { <span>{format!("BSR: {}", format_number(v))}</span> });
                        let rating = item.rating.map(|v| view! { <span>{format!("Rating: {}", format_decimal(v))}</span> });
                        let reviews = item.reviews.map(|v| view! { <span>{format!("Reviews: {}", format_number(v))}</span> });
                        view! {
                            <div class="idea-item">
                                <div class="idea-header">
                                    <div class="idea-title">{truncate_text(&item.title, TITLE_DISPLAY_LEN)}</div>
                                    <div class="idea-score">{item.score}</div>
                                </div>
                                <div class="idea-description">
                                    {truncate_text(&item.description, DESCRIPTION_DISPLAY_LEN)}
                                </div>
                                <div class="idea-stats">
                                    <span class="niche-tag">{item.niche}</span>
                                    {bsr}
                                    {rating}
                                    {reviews}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
