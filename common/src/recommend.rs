//! 推奨事項の生成
//!
//! 勝ち候補の集計から0〜5件の推奨を決まった順序で生成する。

use crate::aggregator::best_niche_by_average;
use crate::fields::{self, example_title};
use crate::terms::SEASONAL;
use crate::types::ScoredRow;
use serde::Serialize;

/// 低ランキング（売れ筋）とみなす上限
pub const LOW_RANK_LIMIT: f64 = 10_000.0;

/// 低競合とみなすレビュー数の上限（未満）
pub const LOW_COMPETITION_REVIEWS: f64 = 100.0;

/// 低競合の推奨に必要なスコア（超過）
pub const LOW_COMPETITION_MIN_SCORE: u32 = 30;

pub const HIGH_RATING: f64 = 4.5;

const MAX_EXAMPLES: usize = 3;

/// 推奨事項
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub icon: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
}

impl Recommendation {
    fn new(icon: &str, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.into(),
            description: description.into(),
            examples: None,
        }
    }

    fn with_examples(mut self, items: &[&ScoredRow]) -> Self {
        self.examples = Some(
            items
                .iter()
                .take(MAX_EXAMPLES)
                .map(|item| example_title(item.row()))
                .collect(),
        );
        self
    }
}

/// 勝ち候補（スコア降順）から推奨を生成
pub fn generate(items: &[ScoredRow]) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if let Some(top) = best_niche_by_average(items) {
        recommendations.push(Recommendation::new(
            "🎯",
            format!("Focus on {} niche", top.niche),
            format!(
                "This niche has the highest average score ({:.1}) with {} winning items. \
                 It shows consistent performance and good market demand.",
                top.avg_score, top.count
            ),
        ));
    }

    let low_rank: Vec<&ScoredRow> = items
        .iter()
        .filter(|item| fields::rank_value(item.row()).is_some_and(|rank| rank <= LOW_RANK_LIMIT))
        .collect();
    if !low_rank.is_empty() {
        recommendations.push(
            Recommendation::new(
                "📈",
                "Target low BSR opportunities",
                format!(
                    "Found {} items with BSR under 10,000. \
                     These represent proven market demand with good sales velocity.",
                    low_rank.len()
                ),
            )
            .with_examples(&low_rank),
        );
    }

    let seasonal: Vec<&ScoredRow> = items
        .iter()
        .filter(|item| item.niche_category() == SEASONAL)
        .collect();
    if !seasonal.is_empty() {
        recommendations.push(
            Recommendation::new(
                "🎃",
                "Leverage seasonal trends",
                format!(
                    "{} seasonal items are performing well. \
                     Plan ahead for upcoming holidays and seasonal events.",
                    seasonal.len()
                ),
            )
            .with_examples(&seasonal),
        );
    }

    let low_competition = items
        .iter()
        .filter(|item| {
            fields::review_value(item.row()).is_some_and(|reviews| reviews < LOW_COMPETITION_REVIEWS)
                && item.winning_score() > LOW_COMPETITION_MIN_SCORE
        })
        .count();
    if low_competition > 0 {
        recommendations.push(Recommendation::new(
            "🚀",
            "Low competition opportunities",
            format!(
                "{} items have good scores but low review counts (under 100). \
                 These may represent less competitive markets.",
                low_competition
            ),
        ));
    }

    let high_rating = items
        .iter()
        .filter(|item| fields::rating_value(item.row()).is_some_and(|rating| rating >= HIGH_RATING))
        .count();
    if high_rating > 0 {
        recommendations.push(Recommendation::new(
            "⭐",
            "Quality is key",
            format!(
                "{} top items have 4.5+ star ratings. \
                 Focus on quality designs and customer satisfaction for long-term success.",
                high_rating
            ),
        ));
    }

    recommendations
}
