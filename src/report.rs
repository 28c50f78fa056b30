//! レポートの端末表示・JSON出力

use crate::error::Result;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt::Write as _;
use tshirt_niche_common::format::{
    format_decimal, format_number, truncate_text, DESCRIPTION_DISPLAY_LEN, TITLE_DISPLAY_LEN,
};
use tshirt_niche_common::AnalysisReport;

/// JSON出力用（生成日時付き）
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEnvelope<'a> {
    pub source: String,
    pub generated_at: String,
    #[serde(flatten)]
    pub report: &'a AnalysisReport,
}

pub fn to_json(report: &AnalysisReport, source: &str, now: DateTime<Local>) -> Result<String> {
    let envelope = ReportEnvelope {
        source: source.to_string(),
        generated_at: now.to_rfc3339(),
        report,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

fn optional_number(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_else(|| "-".to_string())
}

/// 端末表示用のテキストを組み立てる
pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let summary = &report.summary;

    let _ = writeln!(out, "📊 サマリー");
    let _ = writeln!(out, "  全商品数:     {}", summary.total_items);
    let _ = writeln!(out, "  勝ち候補数:   {}", summary.winning_items);
    let _ = writeln!(out, "  平均スコア:   {}", format_decimal(summary.avg_score));
    let _ = writeln!(out, "  除外数:       {}", summary.filtered_items);

    let dist = &report.distribution;
    let _ = writeln!(out, "\n📈 スコア分布");
    let _ = writeln!(
        out,
        "  最大 {} / 平均 {} / 最小 {}",
        dist.max,
        format_decimal(dist.mean),
        dist.min
    );
    let _ = writeln!(
        out,
        "  >20: {}件  >10: {}件  >5: {}件",
        dist.above_20, dist.above_10, dist.above_5
    );

    if summary.winning_items == 0 {
        let _ = writeln!(out, "\n勝ち候補が見つかりませんでした");
        return out;
    }

    let _ = writeln!(out, "\n🏆 トップニッチ");
    for (i, niche) in report.top_niches.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>2}. {:<14} 機会 {:>3}  件数 {:>4}  平均 {:>6}  最高 {:>4}  トップ {}",
            i + 1,
            niche.niche,
            niche.opportunity_score,
            niche.count,
            format_decimal(niche.avg_score),
            niche.max_score,
            niche.top_performers
        );
    }

    let _ = writeln!(out, "\n💡 トップアイデア");
    for (i, idea) in report.top_ideas.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>2}. [{}] {} ({})",
            i + 1,
            idea.score,
            truncate_text(&idea.title, TITLE_DISPLAY_LEN),
            idea.niche
        );
        let _ = writeln!(
            out,
            "      {}",
            truncate_text(&idea.description, DESCRIPTION_DISPLAY_LEN)
        );
        let _ = writeln!(
            out,
            "      BSR {}  評価 {}  レビュー {}",
            optional_number(idea.rank),
            idea.rating.map(format_decimal).unwrap_or_else(|| "-".to_string()),
            optional_number(idea.reviews)
        );
    }

    let _ = writeln!(out, "\n🔍 ニッチ分析");
    for analysis in &report.niche_analysis {
        let _ = writeln!(
            out,
            "  {:<14} 件数 {:>4}  平均スコア {:>6}  平均BSR {:>7}  平均評価 {:>4}  平均レビュー {:>6}",
            analysis.niche,
            analysis.count,
            format_decimal(analysis.avg_score),
            optional_number(analysis.avg_rank),
            analysis.avg_rating.map(format_decimal).unwrap_or_else(|| "-".to_string()),
            optional_number(analysis.avg_reviews)
        );
    }

    if !report.insights.is_empty() {
        let _ = writeln!(out, "\n🧭 ニッチ所見");
        for insight in &report.insights {
            let _ = writeln!(
                out,
                "  {} - {} ({})",
                insight.niche, insight.level, insight.opportunity_score
            );
            for signal in &insight.signals {
                let mark = if signal.is_positive() { "✔" } else { "⚠" };
                let _ = writeln!(out, "      {} {}", mark, signal);
            }
        }
    }

    let _ = writeln!(out, "\n📝 推奨事項");
    for rec in &report.recommendations {
        let _ = writeln!(out, "  {} {}", rec.icon, rec.title);
        let _ = writeln!(out, "      {}", rec.description);
        if let Some(examples) = &rec.examples {
            let _ = writeln!(out, "      例: {}", examples.join(", "));
        }
    }

    out
}
