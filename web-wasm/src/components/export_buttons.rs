//! エクスポートボタンコンポーネント

use leptos::prelude::*;

#[component]
pub fn ExportButtons<FD>(has_results: Signal<bool>, on_download_csv: FD) -> impl IntoView
where
    FD: Fn(()) + 'static + Clone,
{
    view! {
        <div class="export-buttons">
            <button
                class="btn btn-primary"
                disabled=move || !has_results.get()
                on:click={
                    let on_download_csv = on_download_csv.clone();
                    move |_| on_download_csv(())
                }
            >
                "📥 Download Results CSV"
            </button>
        </div>
    }
}
