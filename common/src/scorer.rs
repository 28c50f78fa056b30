//! 勝ちスコア算出
//!
//! ## 算出手順（順に加算）
//! 1. キーワード: 全カテゴリの全キーワードについて部分一致1件ごとに+1
//! 2. ランキング: 最初に解決できた正のBSRを段階評価
//! 3. 評価: 最初に解決できた数値を段階評価
//! 4. レビュー数: 最初に解決できた数値を段階評価
//! 5. 長文ペナルティ: 連結テキストが200文字超なら-5
//!
//! 最終値は0未満にならない。

use crate::fields::{self, combined_text, SCORE_TEXT_COLUMNS};
use crate::terms::TAXONOMY;
use crate::types::Row;
use serde::Serialize;

/// この値を超えると「勝ち」候補
pub const WINNING_THRESHOLD: u32 = 5;

/// トップパフォーマーとみなすスコア
pub const TOP_PERFORMER_SCORE: u32 = 100;

/// 長文ペナルティの閾値（文字数）
pub const LENGTH_PENALTY_CHARS: usize = 200;

pub const LENGTH_PENALTY: u32 = 5;

/// スコアの内訳
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub keyword: u32,
    pub rank: u32,
    pub rating: u32,
    pub reviews: u32,
    pub length_penalty: u32,
}

impl ScoreBreakdown {
    /// 合計（0で下限クランプ）
    pub fn total(&self) -> u32 {
        let sum = i64::from(self.keyword)
            + i64::from(self.rank)
            + i64::from(self.rating)
            + i64::from(self.reviews)
            - i64::from(self.length_penalty);
        sum.max(0) as u32
    }
}

/// テキスト中のキーワード一致数（カテゴリ間の重複は重複計上）
pub fn keyword_hits(text: &str) -> u32 {
    TAXONOMY
        .iter()
        .flat_map(|category| category.keywords.iter())
        .filter(|keyword| text.contains(*keyword))
        .count() as u32
}

pub fn rank_points(rank: f64) -> u32 {
    match rank {
        r if r <= 1_000.0 => 100,
        r if r <= 5_000.0 => 80,
        r if r <= 10_000.0 => 60,
        r if r <= 50_000.0 => 40,
        r if r <= 100_000.0 => 20,
        r if r <= 500_000.0 => 10,
        _ => 0,
    }
}

pub fn rating_points(rating: f64) -> u32 {
    match rating {
        r if r >= 4.5 => 50,
        r if r >= 4.0 => 35,
        r if r >= 3.5 => 20,
        r if r >= 3.0 => 10,
        _ => 0,
    }
}

pub fn review_points(reviews: f64) -> u32 {
    match reviews {
        r if r >= 1_000.0 => 40,
        r if r >= 500.0 => 30,
        r if r >= 100.0 => 20,
        r if r >= 50.0 => 15,
        r if r >= 10.0 => 10,
        r if r >= 1.0 => 5,
        _ => 0,
    }
}

/// 行のスコア内訳を計算
pub fn score_breakdown(row: &Row) -> ScoreBreakdown {
    let text = combined_text(row, SCORE_TEXT_COLUMNS);

    let rank = fields::rank_value(row).map(rank_points).unwrap_or(0);
    let rating = fields::first_numeric(row, fields::RATING_COLUMNS, false)
        .map(rating_points)
        .unwrap_or(0);
    let reviews = fields::first_numeric(row, fields::REVIEW_COLUMNS, true)
        .map(review_points)
        .unwrap_or(0);
    let length_penalty = if text.chars().count() > LENGTH_PENALTY_CHARS {
        LENGTH_PENALTY
    } else {
        0
    };

    ScoreBreakdown {
        keyword: keyword_hits(&text),
        rank,
        rating,
        reviews,
        length_penalty,
    }
}

/// 行の勝ちスコア
pub fn score(row: &Row) -> u32 {
    score_breakdown(row).total()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        Row::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_score_funny_dad_fishing() {
        let r = row(&[
            ("title", "Funny Dad Fishing Shirt"),
            ("rank", "800"),
            ("rating", "4.8"),
            ("reviews", "1200"),
        ]);
        let breakdown = score_breakdown(&r);

        // funny / dad / fishing に加え、fish（animals）も部分一致する
        assert_eq!(breakdown.keyword, 4);
        assert_eq!(breakdown.rank, 100);
        assert_eq!(breakdown.rating, 50);
        assert_eq!(breakdown.reviews, 40);
        assert_eq!(breakdown.length_penalty, 0);
        assert_eq!(score(&r), 194);
    }

    #[test]
    fn test_score_no_signals_is_zero() {
        let r = row(&[("title", "Plain Blue Crewneck Tee With Simple Round Pocket")]);
        assert_eq!(score(&r), 0);
    }

    #[test]
    fn test_length_penalty_clamps_to_zero() {
        let long = "x".repeat(250);
        let r = row(&[("title", long.as_str())]);
        let breakdown = score_breakdown(&r);
        assert_eq!(breakdown.length_penalty, 5);
        assert_eq!(score(&r), 0);
    }

    #[test]
    fn test_length_penalty_applied() {
        let long = "x".repeat(201);
        let r = row(&[("title", long.as_str()), ("bsr", "900")]);
        assert_eq!(score(&r), 95);

        let exact = "x".repeat(200);
        let r = row(&[("title", exact.as_str()), ("bsr", "900")]);
        assert_eq!(score(&r), 100);
    }

    #[test]
    fn test_shared_keyword_counts_twice() {
        // cooking は hobbies と food の両方に属する
        assert_eq!(keyword_hits("cooking"), 2);
    }

    #[test]
    fn test_rank_thresholds() {
        assert_eq!(rank_points(1_000.0), 100);
        assert_eq!(rank_points(1_001.0), 80);
        assert_eq!(rank_points(10_000.0), 60);
        assert_eq!(rank_points(50_000.0), 40);
        assert_eq!(rank_points(100_000.0), 20);
        assert_eq!(rank_points(500_000.0), 10);
        assert_eq!(rank_points(500_001.0), 0);
    }

    #[test]
    fn test_rating_and_review_thresholds() {
        assert_eq!(rating_points(4.5), 50);
        assert_eq!(rating_points(4.0), 35);
        assert_eq!(rating_points(3.5), 20);
        assert_eq!(rating_points(3.0), 10);
        assert_eq!(rating_points(2.9), 0);

        assert_eq!(review_points(1_000.0), 40);
        assert_eq!(review_points(500.0), 30);
        assert_eq!(review_points(100.0), 20);
        assert_eq!(review_points(50.0), 15);
        assert_eq!(review_points(10.0), 10);
        assert_eq!(review_points(1.0), 5);
        assert_eq!(review_points(0.0), 0);
    }

    #[test]
    fn test_rank_uses_first_positive_candidate() {
        // bsr が不正・0 の場合は次の候補列へ
        let r = row(&[("bsr", "abc"), ("best_seller_rank", "0"), ("rank", "4,500")]);
        assert_eq!(score_breakdown(&r).rank, 80);
    }

    #[test]
    fn test_rank_beyond_last_tier_stops_search() {
        let r = row(&[("bsr", "900,000"), ("rank", "10")]);
        assert_eq!(score_breakdown(&r).rank, 0);
    }

    #[test]
    fn test_rating_first_numeric_wins_even_when_low() {
        let r = row(&[("rating", "2.0"), ("stars", "5")]);
        assert_eq!(score_breakdown(&r).rating, 0);

        let r = row(&[("rating", "n/a"), ("stars", "4.1")]);
        assert_eq!(score_breakdown(&r).rating, 35);
    }

    #[test]
    fn test_reviews_with_separators() {
        let r = row(&[("review_count", "1,050")]);
        assert_eq!(score_breakdown(&r).reviews, 40);
    }

    #[test]
    fn test_malformed_numbers_are_skipped() {
        let r = row(&[("rank", "#12"), ("rating", "four"), ("reviews", "many")]);
        assert_eq!(score(&r), 0);
    }

    #[test]
    fn test_breakdown_total_clamps() {
        let breakdown = ScoreBreakdown {
            length_penalty: 5,
            keyword: 2,
            ..Default::default()
        };
        assert_eq!(breakdown.total(), 0);
    }
}
