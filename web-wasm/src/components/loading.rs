//! 解析中表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner" />
            <p class="loading-text">"Analyzing your data..."</p>
        </div>
    }
}
