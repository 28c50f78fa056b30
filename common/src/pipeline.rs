//! 解析パイプライン（CLI/WASM共通）
//!
//! ## 処理フロー
//! 1. 除外語フィルタ
//! 2. スコア算出・ニッチ分類
//! 3. スコア降順に安定ソート
//! 4. 勝ち候補（スコア > 5）の抽出
//! 5. 集計・推奨生成 → AnalysisReport
//!
//! 毎回データセット全体から再計算し、前回結果は持ち越さない。

use crate::aggregator::{
    self, IdeaView, NicheAnalysis, NicheStats, NICHE_ANALYSIS_LIMIT, TOP_IDEAS_LIMIT, TOP_NICHES_LIMIT,
};
use crate::classifier::classify;
use crate::filter::{is_blocked, matched_term};
use crate::insights::{niche_insights, NicheInsight};
use crate::recommend::{self, Recommendation};
use crate::scorer::{score_breakdown, WINNING_THRESHOLD};
use crate::types::{Dataset, ScoredRow};
use serde::Serialize;

/// 集計カウンタ
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// 入力行数
    pub total_items: usize,
    /// 勝ち候補数
    pub winning_items: usize,
    /// 勝ち候補の平均スコア（候補なしは0）
    pub avg_score: f64,
    /// 除外語で落とした行数
    pub filtered_items: usize,
}

/// 除外後の全行に対するスコア分布
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDistribution {
    pub max: u32,
    pub mean: f64,
    pub min: u32,
    pub above_20: usize,
    pub above_10: usize,
    pub above_5: usize,
}

/// 表示層に渡すビューモデル
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub summary: Summary,
    pub distribution: ScoreDistribution,
    pub top_niches: Vec<NicheStats>,
    pub top_ideas: Vec<IdeaView>,
    pub niche_analysis: Vec<NicheAnalysis>,
    pub recommendations: Vec<Recommendation>,
    pub insights: Vec<NicheInsight>,
}

/// 1回分の解析結果
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    headers: Vec<String>,
    total_items: usize,
    scored: Vec<ScoredRow>,
}

/// データセットを解析する
pub fn analyze(dataset: &Dataset) -> Analysis {
    analyze_with_progress(dataset, |_| {})
}

/// 1行処理するごとに `on_row(処理済み行数)` を呼ぶ
pub fn analyze_with_progress<F>(dataset: &Dataset, mut on_row: F) -> Analysis
where
    F: FnMut(usize),
{
    let mut scored = Vec::with_capacity(dataset.len());

    for (i, row) in dataset.rows.iter().enumerate() {
        if is_blocked(row) {
            tracing::debug!(row = i, term = matched_term(row).unwrap_or(""), "除外語に一致");
        } else {
            let breakdown = score_breakdown(row);
            let niche = classify(row);
            tracing::debug!(
                row = i,
                keyword = breakdown.keyword,
                rank = breakdown.rank,
                rating = breakdown.rating,
                reviews = breakdown.reviews,
                penalty = breakdown.length_penalty,
                total = breakdown.total(),
                niche,
                "スコア算出"
            );
            scored.push(ScoredRow::new(row.clone(), breakdown.total(), niche));
        }
        on_row(i + 1);
    }

    // 安定ソート: 同点は入力順
    scored.sort_by(|a, b| b.winning_score().cmp(&a.winning_score()));

    let analysis = Analysis {
        headers: dataset.headers.clone(),
        total_items: dataset.len(),
        scored,
    };
    tracing::debug!(
        total = analysis.total_items,
        filtered = analysis.filtered_items(),
        winning = analysis.winning().len(),
        "解析完了"
    );
    analysis
}

impl Analysis {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn filtered_items(&self) -> usize {
        self.total_items - self.scored.len()
    }

    /// 除外されなかった全行（スコア降順）
    pub fn scored(&self) -> &[ScoredRow] {
        &self.scored
    }

    /// 勝ち候補（スコア > 5、スコア降順）
    pub fn winning(&self) -> &[ScoredRow] {
        let end = self
            .scored
            .partition_point(|item| item.winning_score() > WINNING_THRESHOLD);
        &self.scored[..end]
    }

    /// エクスポート対象の行
    pub fn export_rows(&self, winning_only: bool) -> &[ScoredRow] {
        if winning_only {
            self.winning()
        } else {
            self.scored()
        }
    }

    pub fn summary(&self) -> Summary {
        let winning = self.winning();
        let avg_score = if winning.is_empty() {
            0.0
        } else {
            winning.iter().map(|i| f64::from(i.winning_score())).sum::<f64>() / winning.len() as f64
        };

        Summary {
            total_items: self.total_items,
            winning_items: winning.len(),
            avg_score,
            filtered_items: self.filtered_items(),
        }
    }

    pub fn distribution(&self) -> ScoreDistribution {
        if self.scored.is_empty() {
            return ScoreDistribution::default();
        }
        let scores: Vec<u32> = self.scored.iter().map(|i| i.winning_score()).collect();
        let sum: f64 = scores.iter().map(|s| f64::from(*s)).sum();

        ScoreDistribution {
            max: scores.iter().copied().max().unwrap_or(0),
            mean: sum / scores.len() as f64,
            min: scores.iter().copied().min().unwrap_or(0),
            above_20: scores.iter().filter(|s| **s > 20).count(),
            above_10: scores.iter().filter(|s| **s > 10).count(),
            above_5: scores.iter().filter(|s| **s > 5).count(),
        }
    }

    /// 表示用ビューモデルを組み立てる
    pub fn report(&self) -> AnalysisReport {
        let winning = self.winning();
        let top_niches = aggregator::top_niches(winning, TOP_NICHES_LIMIT);
        let niche_analysis = aggregator::niche_analysis(winning, NICHE_ANALYSIS_LIMIT);
        let insights = niche_insights(&top_niches, &niche_analysis);

        AnalysisReport {
            summary: self.summary(),
            distribution: self.distribution(),
            top_ideas: aggregator::top_ideas(winning, TOP_IDEAS_LIMIT),
            recommendations: recommend::generate(winning),
            top_niches,
            niche_analysis,
            insights,
        }
    }
}
