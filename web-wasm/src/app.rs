//! メインアプリケーションコンポーネント

use crate::components::{
    export_buttons::ExportButtons,
    header::Header,
    idea_list::IdeaList,
    loading::Loading,
    niche_analysis::NicheAnalysisPanel,
    niche_list::NicheList,
    recommendations::Recommendations,
    stats_panel::StatsPanel,
    upload_area::{UploadArea, READ_ERROR_MESSAGE},
};
use crate::export::download;
use gloo::dialogs::alert;
use leptos::prelude::*;
use std::time::Duration;
use tshirt_niche_common::{analyze, parse_str, Analysis, AnalysisReport};

/// 読み込んだCSVを解析する
///
/// 解析は毎回データセット全体から作り直す。
pub fn run_analysis(content: &str) -> Result<(Analysis, AnalysisReport), String> {
    let dataset = parse_str(content).map_err(|e| {
        gloo::console::error!(format!("CSV解析エラー: {}", e));
        READ_ERROR_MESSAGE.to_string()
    })?;
    let analysis = analyze(&dataset);
    let report = analysis.report();
    Ok((analysis, report))
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態（アップロードごとに丸ごと置き換える）
    let (analysis, set_analysis) = signal(None::<Analysis>);
    let (report, set_report) = signal(None::<AnalysisReport>);
    let (is_loading, set_is_loading) = signal(false);

    // CSV読み込み完了ハンドラ
    let on_csv_loaded = move |content: String| {
        set_is_loading.set(true);

        // 描画を一度返してから解析する（ローディング表示のため）
        set_timeout(
            move || {
                match run_analysis(&content) {
                    Ok((new_analysis, new_report)) => {
                        if let Ok(summary) = serde_json::to_string(&new_report.summary) {
                            gloo::console::log!(format!("解析完了: {}", summary));
                        }
                        set_analysis.set(Some(new_analysis));
                        set_report.set(Some(new_report));
                    }
                    // 失敗時は前回の表示をそのまま残す
                    Err(message) => alert(&message),
                }
                set_is_loading.set(false);
            },
            Duration::from_millis(100),
        );
    };

    // CSVダウンロードハンドラ
    let on_download_csv = move |_| {
        let result = analysis.with_untracked(|a| download::download_results(a.as_ref()));
        if let Err(message) = result {
            alert(&message);
        }
    };

    let has_results = Signal::derive(move || analysis.with(|a| a.is_some()));

    view! {
        <div class="container">
            <Header />

            <UploadArea is_loading=is_loading on_csv_loaded=on_csv_loaded />

            <Show when=move || is_loading.get()>
                <Loading />
            </Show>

            {move || {
                report
                    .get()
                    .filter(|_| !is_loading.get())
                    .map(|r| {
                        view! {
                            <section class="results-section">
                                <StatsPanel summary=r.summary />
                                <div class="results-grid">
                                    <NicheList niches=r.top_niches />
                                    <IdeaList ideas=r.top_ideas />
                                </div>
                                <NicheAnalysisPanel analysis=r.niche_analysis insights=r.insights />
                                <Recommendations recommendations=r.recommendations />
                            </section>
                        }
                    })
            }}

            <ExportButtons has_results=has_results on_download_csv=on_download_csv />
        </div>
    }
}
