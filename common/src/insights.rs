//! 上位ニッチの所見
//!
//! トップニッチ上位5件について、機会レベルと注目点を付ける。

use crate::aggregator::{NicheAnalysis, NicheStats};
use serde::Serialize;
use std::fmt;

pub const INSIGHT_LIMIT: usize = 5;

/// 機会レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OpportunityLevel {
    High,
    Medium,
    Low,
}

impl OpportunityLevel {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            OpportunityLevel::High
        } else if score >= 60 {
            OpportunityLevel::Medium
        } else {
            OpportunityLevel::Low
        }
    }
}

impl fmt::Display for OpportunityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpportunityLevel::High => write!(f, "HIGH"),
            OpportunityLevel::Medium => write!(f, "MEDIUM"),
            OpportunityLevel::Low => write!(f, "LOW"),
        }
    }
}

/// 注目点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum InsightSignal {
    StrongRank,
    SaturatedRank,
    HighSatisfaction,
    QualityGap,
    LowCompetition,
    HighCompetition,
    ProvenWinners(usize),
}

impl InsightSignal {
    /// 好材料か（表示の記号に使う）
    pub fn is_positive(&self) -> bool {
        !matches!(
            self,
            InsightSignal::SaturatedRank | InsightSignal::QualityGap | InsightSignal::HighCompetition
        )
    }
}

impl fmt::Display for InsightSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsightSignal::StrongRank => write!(f, "Strong BSR performance - proven market demand"),
            InsightSignal::SaturatedRank => write!(f, "High BSR - consider market saturation"),
            InsightSignal::HighSatisfaction => write!(f, "High customer satisfaction"),
            InsightSignal::QualityGap => write!(f, "Room for quality improvement"),
            InsightSignal::LowCompetition => write!(f, "Low competition - good entry opportunity"),
            InsightSignal::HighCompetition => write!(f, "High competition - need strong differentiation"),
            InsightSignal::ProvenWinners(n) => write!(f, "{} proven winners in this niche", n),
        }
    }
}

/// ニッチの所見
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NicheInsight {
    pub niche: String,
    pub opportunity_score: u32,
    pub level: OpportunityLevel,
    pub signals: Vec<InsightSignal>,
}

fn signals_for(stats: &NicheStats, analysis: Option<&NicheAnalysis>) -> Vec<InsightSignal> {
    let mut signals = Vec::new();

    let avg_rank = analysis.and_then(|a| a.avg_rank);
    let avg_rating = analysis.and_then(|a| a.avg_rating);

    match avg_rank {
        Some(rank) if rank > 0.0 && rank <= 50_000.0 => signals.push(InsightSignal::StrongRank),
        Some(rank) if rank > 500_000.0 => signals.push(InsightSignal::SaturatedRank),
        _ => {}
    }

    match avg_rating {
        Some(rating) if rating >= 4.0 => signals.push(InsightSignal::HighSatisfaction),
        Some(rating) if rating > 0.0 && rating < 3.5 => signals.push(InsightSignal::QualityGap),
        _ => {}
    }

    if stats.count < 20 {
        signals.push(InsightSignal::LowCompetition);
    } else if stats.count > 100 {
        signals.push(InsightSignal::HighCompetition);
    }

    if stats.top_performers > 0 {
        signals.push(InsightSignal::ProvenWinners(stats.top_performers));
    }

    signals
}

/// トップニッチ上位の所見を生成
///
/// `analysis` はニッチ名で突き合わせる（件数制限で欠けていても可）。
pub fn niche_insights(top: &[NicheStats], analysis: &[NicheAnalysis]) -> Vec<NicheInsight> {
    top.iter()
        .take(INSIGHT_LIMIT)
        .map(|stats| {
            let matched = analysis.iter().find(|a| a.niche == stats.niche);
            NicheInsight {
                niche: stats.niche.clone(),
                opportunity_score: stats.opportunity_score,
                level: OpportunityLevel::from_score(stats.opportunity_score),
                signals: signals_for(stats, matched),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(niche: &str, count: usize, top_performers: usize, opportunity: u32) -> NicheStats {
        NicheStats {
            niche: niche.to_string(),
            count,
            total_score: 0,
            max_score: 0,
            top_performers,
            avg_score: 0.0,
            opportunity_score: opportunity,
        }
    }

    fn analysis(niche: &str, rank: Option<f64>, rating: Option<f64>) -> NicheAnalysis {
        NicheAnalysis {
            niche: niche.to_string(),
            count: 1,
            avg_score: 0.0,
            avg_rank: rank,
            avg_rating: rating,
            avg_reviews: None,
        }
    }

    #[test]
    fn test_levels() {
        assert_eq!(OpportunityLevel::from_score(80), OpportunityLevel::High);
        assert_eq!(OpportunityLevel::from_score(79), OpportunityLevel::Medium);
        assert_eq!(OpportunityLevel::from_score(60), OpportunityLevel::Medium);
        assert_eq!(OpportunityLevel::from_score(59), OpportunityLevel::Low);
        assert_eq!(OpportunityLevel::High.to_string(), "HIGH");
    }

    #[test]
    fn test_signals_positive() {
        let top = vec![stats("humor", 12, 3, 85)];
        let insights = niche_insights(&top, &[analysis("humor", Some(8_000.0), Some(4.6))]);

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].level, OpportunityLevel::High);
        assert_eq!(
            insights[0].signals,
            vec![
                InsightSignal::StrongRank,
                InsightSignal::HighSatisfaction,
                InsightSignal::LowCompetition,
                InsightSignal::ProvenWinners(3),
            ]
        );
        assert!(insights[0].signals.iter().all(|s| s.is_positive()));
    }

    #[test]
    fn test_signals_warnings() {
        let top = vec![stats("sports", 150, 0, 40)];
        let insights = niche_insights(&top, &[analysis("sports", Some(600_000.0), Some(3.0))]);
        assert_eq!(
            insights[0].signals,
            vec![
                InsightSignal::SaturatedRank,
                InsightSignal::QualityGap,
                InsightSignal::HighCompetition,
            ]
        );
        assert!(insights[0].signals.iter().all(|s| !s.is_positive()));
    }

    #[test]
    fn test_limited_to_five_and_missing_analysis() {
        let top: Vec<NicheStats> = (0..8).map(|i| stats(&format!("n{}", i), 50, 0, 10)).collect();
        let insights = niche_insights(&top, &[]);
        assert_eq!(insights.len(), INSIGHT_LIMIT);
        assert!(insights[0].signals.is_empty());
    }

    #[test]
    fn test_signal_display() {
        assert_eq!(
            InsightSignal::ProvenWinners(2).to_string(),
            "2 proven winners in this niche"
        );
    }
}
