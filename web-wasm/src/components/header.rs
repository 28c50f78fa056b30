//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"👕 T-Shirt Niche Analyzer"</h1>
            <p class="subtitle">"Find winning t-shirt ideas and profitable niches from your product CSV"</p>
        </header>
    }
}
