//! T-shirt Niche Common Library
//!
//! CLIとWeb(WASM)で共有される解析コアとユーティリティ

pub mod aggregator;
pub mod classifier;
pub mod csv_io;
pub mod error;
pub mod export;
pub mod fields;
pub mod filter;
pub mod format;
pub mod insights;
pub mod pipeline;
pub mod recommend;
pub mod scorer;
pub mod terms;
pub mod types;

pub use aggregator::{IdeaView, NicheAnalysis, NicheStats};
pub use csv_io::{ensure_csv_name, parse_str, read_dataset, to_csv_string, write_scored, EXPORT_FILE_NAME};
pub use error::{Error, Result};
pub use insights::{NicheInsight, OpportunityLevel};
pub use pipeline::{analyze, analyze_with_progress, Analysis, AnalysisReport, ScoreDistribution, Summary};
pub use recommend::Recommendation;
pub use types::{Dataset, Row, ScoredRow};
