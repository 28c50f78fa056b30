//! ニッチ集計
//!
//! 勝ち候補（スコア降順）を受け取り、以下を生成する:
//! - トップニッチ（機会スコア順、最大10件）
//! - トップアイデア（スコア順、最大20件）
//! - ニッチ分析（平均スコア順、最大10件）
//!
//! ニッチの並びは初出順を基準にし、安定ソートで順位付けする。

use crate::fields::{self, display_description, display_title};
use crate::scorer::TOP_PERFORMER_SCORE;
use crate::types::ScoredRow;
use serde::Serialize;
use std::collections::HashMap;

pub const TOP_NICHES_LIMIT: usize = 10;
pub const TOP_IDEAS_LIMIT: usize = 20;
pub const NICHE_ANALYSIS_LIMIT: usize = 10;

/// ニッチごとの集計値
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NicheStats {
    pub niche: String,
    pub count: usize,
    pub total_score: u64,
    pub max_score: u32,
    pub top_performers: usize,
    pub avg_score: f64,
    pub opportunity_score: u32,
}

/// ニッチ分析（平均値は解決できた正の値のみで計算）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NicheAnalysis {
    pub niche: String,
    pub count: usize,
    pub avg_score: f64,
    pub avg_rank: Option<f64>,
    pub avg_rating: Option<f64>,
    pub avg_reviews: Option<f64>,
}

/// トップアイデアの表示用データ
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaView {
    pub title: String,
    pub description: String,
    pub score: u32,
    pub niche: String,
    pub rank: Option<f64>,
    pub rating: Option<f64>,
    pub reviews: Option<f64>,
}

impl From<&ScoredRow> for IdeaView {
    fn from(item: &ScoredRow) -> Self {
        let row = item.row();
        Self {
            title: display_title(row).to_string(),
            description: display_description(row).to_string(),
            score: item.winning_score(),
            niche: item.niche_category().to_string(),
            rank: fields::rank_value(row),
            rating: fields::rating_value(row),
            reviews: fields::review_value(row),
        }
    }
}

/// 機会スコア（0〜100）
///
/// 件数帯は 20–100 → 10–200 → 5–50 の順に判定し、最初に当たった帯のみ加点する。
/// どの帯にも入らない件数（例: 300）は0点。
pub fn opportunity_score(count: usize, avg_score: f64, top_performers: usize, max_score: u32) -> u32 {
    let mut score = 0;

    // 平均スコア
    if avg_score >= 50.0 {
        score += 40;
    } else if avg_score >= 30.0 {
        score += 30;
    } else if avg_score >= 20.0 {
        score += 20;
    }

    // 件数
    if (20..=100).contains(&count) {
        score += 30;
    } else if (10..=200).contains(&count) {
        score += 20;
    } else if (5..=50).contains(&count) {
        score += 15;
    }

    // トップパフォーマー数
    if top_performers >= 5 {
        score += 20;
    } else if top_performers >= 2 {
        score += 15;
    } else if top_performers >= 1 {
        score += 10;
    }

    // 最高スコア
    if max_score >= 150 {
        score += 10;
    } else if max_score >= 100 {
        score += 5;
    }

    score
}

/// ニッチ名でグループ化（初出順）
fn group_by_niche(items: &[ScoredRow]) -> Vec<(&'static str, Vec<&ScoredRow>)> {
    let mut index: HashMap<&'static str, usize> = HashMap::new();
    let mut groups: Vec<(&'static str, Vec<&ScoredRow>)> = Vec::new();

    for item in items {
        let niche = item.niche_category();
        let slot = *index.entry(niche).or_insert_with(|| {
            groups.push((niche, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(item);
    }

    groups
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// ニッチごとの集計（初出順）
pub fn niche_stats(items: &[ScoredRow]) -> Vec<NicheStats> {
    group_by_niche(items)
        .into_iter()
        .map(|(niche, members)| {
            let count = members.len();
            let total_score: u64 = members.iter().map(|m| u64::from(m.winning_score())).sum();
            let max_score = members.iter().map(|m| m.winning_score()).max().unwrap_or(0);
            let top_performers = members
                .iter()
                .filter(|m| m.winning_score() >= TOP_PERFORMER_SCORE)
                .count();
            let avg_score = total_score as f64 / count as f64;

            NicheStats {
                niche: niche.to_string(),
                count,
                total_score,
                max_score,
                top_performers,
                avg_score,
                opportunity_score: opportunity_score(count, avg_score, top_performers, max_score),
            }
        })
        .collect()
}

/// 機会スコア順のトップニッチ
pub fn top_niches(items: &[ScoredRow], limit: usize) -> Vec<NicheStats> {
    let mut stats = niche_stats(items);
    stats.sort_by(|a, b| b.opportunity_score.cmp(&a.opportunity_score));
    stats.truncate(limit);
    stats
}

/// 平均スコア最大のニッチ（同値は初出優先）
pub fn best_niche_by_average(items: &[ScoredRow]) -> Option<NicheStats> {
    niche_stats(items)
        .into_iter()
        .fold(None, |best: Option<NicheStats>, candidate| match best {
            Some(b) if b.avg_score >= candidate.avg_score => Some(b),
            _ => Some(candidate),
        })
}

/// スコア順のトップアイデア（入力はスコア降順の前提）
pub fn top_ideas(items: &[ScoredRow], limit: usize) -> Vec<IdeaView> {
    items.iter().take(limit).map(IdeaView::from).collect()
}

/// ニッチ分析（平均スコア順）
pub fn niche_analysis(items: &[ScoredRow], limit: usize) -> Vec<NicheAnalysis> {
    let mut analysis: Vec<NicheAnalysis> = group_by_niche(items)
        .into_iter()
        .map(|(niche, members)| {
            let count = members.len();
            let total: u64 = members.iter().map(|m| u64::from(m.winning_score())).sum();

            NicheAnalysis {
                niche: niche.to_string(),
                count,
                avg_score: total as f64 / count as f64,
                avg_rank: mean(members.iter().filter_map(|m| fields::rank_value(m.row()))),
                avg_rating: mean(members.iter().filter_map(|m| fields::rating_value(m.row()))),
                avg_reviews: mean(members.iter().filter_map(|m| fields::review_value(m.row()))),
            }
        })
        .collect();

    analysis.sort_by(|a, b| b.avg_score.total_cmp(&a.avg_score));
    analysis.truncate(limit);
    analysis
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Row;

    fn item(niche: &'static str, score: u32) -> ScoredRow {
        ScoredRow::new(Row::from_pairs([("title", format!("{} {}", niche, score))]), score, niche)
    }

    #[test]
    fn test_opportunity_score_example() {
        // 30件・平均55・トップ6件・最高160 → 40 + 30 + 20 + 10
        assert_eq!(opportunity_score(30, 55.0, 6, 160), 100);
    }

    #[test]
    fn test_opportunity_score_count_tiers() {
        assert_eq!(opportunity_score(20, 0.0, 0, 0), 30);
        assert_eq!(opportunity_score(100, 0.0, 0, 0), 30);
        assert_eq!(opportunity_score(10, 0.0, 0, 0), 20);
        assert_eq!(opportunity_score(150, 0.0, 0, 0), 20);
        assert_eq!(opportunity_score(5, 0.0, 0, 0), 15);
        assert_eq!(opportunity_score(4, 0.0, 0, 0), 0);
        // どの帯にも入らない
        assert_eq!(opportunity_score(300, 0.0, 0, 0), 0);
    }

    #[test]
    fn test_opportunity_score_bounds() {
        for count in [0usize, 1, 5, 9, 10, 19, 20, 50, 100, 101, 200, 201, 1000] {
            for avg in [0.0, 19.9, 20.0, 30.0, 50.0, 200.0] {
                for top in [0usize, 1, 2, 5, 50] {
                    for max in [0u32, 99, 100, 150, 400] {
                        let s = opportunity_score(count, avg, top, max);
                        assert!(s <= 100, "{} > 100", s);
                    }
                }
            }
        }
    }

    #[test]
    fn test_niche_stats_first_seen_order() {
        let items = vec![item("humor", 120), item("sports", 40), item("humor", 30)];
        let stats = niche_stats(&items);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].niche, "humor");
        assert_eq!(stats[0].count, 2);
        assert_eq!(stats[0].total_score, 150);
        assert_eq!(stats[0].max_score, 120);
        assert_eq!(stats[0].top_performers, 1);
        assert!((stats[0].avg_score - 75.0).abs() < 1e-9);
        assert_eq!(stats[1].niche, "sports");
    }

    #[test]
    fn test_top_niches_sorted_and_limited() {
        let mut items = Vec::new();
        for i in 0..12u32 {
            let niche: &'static str = crate::terms::TAXONOMY
                .get(i as usize)
                .map(|c| c.name)
                .unwrap_or("general");
            items.push(item(niche, 10 + i * 10));
        }
        // 12ニッチ（分類表10 + general 2件は同一グループ）
        let top = top_niches(&items, TOP_NICHES_LIMIT);
        assert!(top.len() <= TOP_NICHES_LIMIT);
        for pair in top.windows(2) {
            assert!(pair[0].opportunity_score >= pair[1].opportunity_score);
        }
    }

    #[test]
    fn test_best_niche_by_average_tie_keeps_first() {
        let items = vec![item("food", 40), item("pets", 40)];
        let best = best_niche_by_average(&items).expect("ニッチがあるはず");
        assert_eq!(best.niche, "food");
        assert!(best_niche_by_average(&[]).is_none());
    }

    #[test]
    fn test_top_ideas_limit_and_fallbacks() {
        let items: Vec<ScoredRow> = (0..25)
            .map(|i| ScoredRow::new(Row::new(), 100 - i, "general"))
            .collect();
        let ideas = top_ideas(&items, TOP_IDEAS_LIMIT);
        assert_eq!(ideas.len(), 20);
        assert_eq!(ideas[0].score, 100);
        assert_eq!(ideas[0].title, "No title");
        assert_eq!(ideas[0].description, "No description");
        assert_eq!(ideas[0].rank, None);
    }

    #[test]
    fn test_niche_analysis_averages_resolved_values_only() {
        let items = vec![
            ScoredRow::new(
                Row::from_pairs([("bsr", "1,000"), ("rating", "4.0"), ("reviews", "100")]),
                80,
                "humor",
            ),
            ScoredRow::new(
                Row::from_pairs([("bsr", "3000"), ("rating", "0"), ("reviews", "")]),
                40,
                "humor",
            ),
            ScoredRow::new(Row::new(), 90, "sports"),
        ];

        let analysis = niche_analysis(&items, NICHE_ANALYSIS_LIMIT);
        assert_eq!(analysis.len(), 2);
        // 平均スコア順: sports(90) → humor(60)
        assert_eq!(analysis[0].niche, "sports");
        assert_eq!(analysis[0].avg_rank, None);

        let humor = &analysis[1];
        assert_eq!(humor.count, 2);
        assert!((humor.avg_score - 60.0).abs() < 1e-9);
        assert_eq!(humor.avg_rank, Some(2000.0));
        assert_eq!(humor.avg_rating, Some(4.0));
        assert_eq!(humor.avg_reviews, Some(100.0));
    }
}
