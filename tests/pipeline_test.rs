//! 解析パイプラインの統合テスト
//!
//! CSVファイル → 解析 → レポートの流れを検証

use std::path::Path;
use tempfile::tempdir;
use tshirt_niche::analyze_file;
use tshirt_niche::error::NicheError;
use tshirt_niche_common::aggregator::opportunity_score;
use tshirt_niche_common::terms::is_known_category;
use tshirt_niche_common::OpportunityLevel;

const LISTINGS: &str = "\
title,description,bsr,rating,reviews
Funny Dad Fishing Shirt,,800,4.8,1200
Official Disney Mickey Shirt,,100,5.0,5000
Plain Crewneck With Simple Round Pocket For Daily Wear ok,,,,
Sarcastic Nurse Life,Witty gift for nurses,4500,4.4,320
Vintage Retro Cat Lover,,\"20,000\",4.2,80
Golf Grandpa,,,3.6,12
";

fn write_csv(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("CSV書き込み失敗");
    path
}

#[test]
fn test_analyze_file_end_to_end() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_csv(dir.path(), "listings.csv", LISTINGS);

    let analysis = analyze_file(&path).expect("解析失敗");
    assert_eq!(analysis.total_items(), 6);
    assert_eq!(analysis.filtered_items(), 1);
    assert_eq!(analysis.winning().len(), 4);

    let report = analysis.report();
    assert_eq!(report.summary.total_items, 6);
    assert_eq!(report.summary.winning_items, 4);
    assert_eq!(report.top_ideas[0].title, "Funny Dad Fishing Shirt");
    assert_eq!(report.top_ideas[0].score, 194);
    assert!(report.top_niches.len() <= 10);
    assert!(report.top_niches.iter().all(|n| n.opportunity_score <= 100));
}

#[test]
fn test_scenario_funny_dad_is_hobbies() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_csv(
        dir.path(),
        "one.csv",
        "title,rank,rating,reviews\nFunny Dad Fishing Shirt,800,4.8,1200\n",
    );

    let analysis = analyze_file(&path).expect("解析失敗");
    let item = &analysis.scored()[0];
    // 100 (rank) + 50 (rating) + 40 (reviews) + 4 (keywords)
    assert_eq!(item.winning_score(), 194);
    assert_eq!(item.niche_category(), "hobbies");
}

#[test]
fn test_scenario_plain_row_is_general_and_not_winning() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_csv(
        dir.path(),
        "plain.csv",
        "title\nPlain Crewneck With Simple Round Pocket For Daily Wear ok\n",
    );

    let analysis = analyze_file(&path).expect("解析失敗");
    assert_eq!(analysis.scored()[0].winning_score(), 0);
    assert_eq!(analysis.scored()[0].niche_category(), "general");
    assert!(analysis.winning().is_empty());
}

#[test]
fn test_blocked_rows_counted_not_scored() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_csv(dir.path(), "listings.csv", LISTINGS);

    let analysis = analyze_file(&path).expect("解析失敗");
    assert!(analysis
        .scored()
        .iter()
        .all(|r| !r.get("title").unwrap_or("").to_lowercase().contains("disney")));
    assert!(analysis.scored().iter().all(|r| is_known_category(r.niche_category())));
}

#[test]
fn test_rerun_identical() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_csv(dir.path(), "listings.csv", LISTINGS);

    let first = analyze_file(&path).expect("解析失敗");
    let second = analyze_file(&path).expect("解析失敗");
    assert_eq!(first.scored(), second.scored());
    assert_eq!(first.report(), second.report());
}

#[test]
fn test_opportunity_for_large_strong_niche() {
    // 件数30は20–100帯（30点）に入るため満点
    assert_eq!(opportunity_score(30, 55.0, 6, 160), 100);
    assert_eq!(OpportunityLevel::from_score(100), OpportunityLevel::High);
}

#[test]
fn test_non_csv_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_csv(dir.path(), "listings.txt", LISTINGS);

    let result = analyze_file(&path);
    assert!(matches!(result, Err(NicheError::NotCsv(_))));
}

#[test]
fn test_missing_file() {
    let result = analyze_file(Path::new("/nonexistent/path/12345.csv"));
    assert!(matches!(result, Err(NicheError::FileNotFound(_))));
}
