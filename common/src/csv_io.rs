//! CSV入出力アダプタ
//!
//! ヘッダー行を列名として読み込み、解析結果を
//! 元の列 + `winning_score` + `niche_category` の形で書き出す。

use crate::error::{Error, Result};
use crate::types::{Dataset, Row, ScoredRow};
use csv::{ReaderBuilder, WriterBuilder};
use std::io::{Read, Write};

/// ダウンロード／出力ファイル名
pub const EXPORT_FILE_NAME: &str = "tshirt_analysis_results.csv";

pub const SCORE_COLUMN: &str = "winning_score";
pub const NICHE_COLUMN: &str = "niche_category";

/// ファイル名が `.csv` で終わるか（拡張子のみで判定）
pub fn ensure_csv_name(file_name: &str) -> Result<()> {
    if file_name.ends_with(".csv") {
        Ok(())
    } else {
        Err(Error::NotCsv(file_name.to_string()))
    }
}

/// CSVを読み込む
///
/// 列数が揃わない行も受け付ける。不足セルは列なし扱い、余剰セルは無視。
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let row = Row::from_pairs(headers.iter().map(String::as_str).zip(record.iter()));
        rows.push(row);
    }

    tracing::debug!(columns = headers.len(), rows = rows.len(), "CSV読み込み完了");
    Ok(Dataset::new(headers, rows))
}

/// 文字列からCSVを読み込む
pub fn parse_str(content: &str) -> Result<Dataset> {
    read_dataset(content.as_bytes())
}

/// 出力ヘッダー（元の列 + 派生列。既存なら追加しない）
pub fn export_headers(headers: &[String]) -> Vec<String> {
    let mut out = headers.to_vec();
    for derived in [SCORE_COLUMN, NICHE_COLUMN] {
        if !out.iter().any(|h| h == derived) {
            out.push(derived.to_string());
        }
    }
    out
}

/// 解析結果をCSVとして書き出す。行がなければ EmptyExport
pub fn write_scored<W: Write>(writer: W, headers: &[String], rows: &[ScoredRow]) -> Result<()> {
    if rows.is_empty() {
        return Err(Error::EmptyExport);
    }

    let columns = export_headers(headers);
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(&columns)?;

    for item in rows {
        let score = item.winning_score().to_string();
        let record: Vec<&str> = columns
            .iter()
            .map(|column| match column.as_str() {
                SCORE_COLUMN => score.as_str(),
                NICHE_COLUMN => item.niche_category(),
                other => item.get(other).unwrap_or(""),
            })
            .collect();
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// 解析結果をCSV文字列にする（ブラウザのダウンロード用）
pub fn to_csv_string(headers: &[String], rows: &[ScoredRow]) -> Result<String> {
    let mut buffer = Vec::new();
    write_scored(&mut buffer, headers, rows)?;
    String::from_utf8(buffer).map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_csv_name() {
        assert!(ensure_csv_name("listings.csv").is_ok());
        assert!(matches!(ensure_csv_name("listings.xlsx"), Err(Error::NotCsv(_))));
        // 大文字拡張子は受け付けない（拡張子の単純比較）
        assert!(ensure_csv_name("LISTINGS.CSV").is_err());
    }

    #[test]
    fn test_parse_headers_and_rows() {
        let dataset = parse_str("title,rank,rating\nFunny Dad,800,4.8\nRetro Cat,\"1,200\",4.1\n")
            .expect("CSV解析失敗");
        assert_eq!(dataset.headers, vec!["title", "rank", "rating"]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rows[1].get("rank"), Some("1,200"));
    }

    #[test]
    fn test_ragged_rows_tolerated() {
        let dataset = parse_str("title,rank,rating\nShort Row\nLong,1,2,extra\n").expect("CSV解析失敗");
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rows[0].get("title"), Some("Short Row"));
        assert_eq!(dataset.rows[0].get("rank"), None);
        assert_eq!(dataset.rows[1].len(), 3);
    }

    #[test]
    fn test_header_only_is_empty_dataset() {
        let dataset = parse_str("title,rank\n").expect("CSV解析失敗");
        assert!(dataset.is_empty());
        assert_eq!(dataset.headers.len(), 2);
    }

    #[test]
    fn test_write_appends_derived_columns() {
        let headers = vec!["title".to_string(), "rank".to_string()];
        let rows = vec![ScoredRow::new(
            Row::from_pairs([("title", "Funny, Dad"), ("rank", "800")]),
            194,
            "hobbies",
        )];

        let out = to_csv_string(&headers, &rows).expect("CSV出力失敗");
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("title,rank,winning_score,niche_category"));
        assert_eq!(lines.next(), Some("\"Funny, Dad\",800,194,hobbies"));
    }

    #[test]
    fn test_write_overwrites_existing_derived_column() {
        let headers = vec!["winning_score".to_string(), "title".to_string()];
        let rows = vec![ScoredRow::new(
            Row::from_pairs([("winning_score", "999"), ("title", "Tee")]),
            7,
            "general",
        )];
        let out = to_csv_string(&headers, &rows).expect("CSV出力失敗");
        assert!(out.starts_with("winning_score,title,niche_category\n7,Tee,general\n"));
    }

    #[test]
    fn test_write_empty_is_error() {
        let result = to_csv_string(&["title".to_string()], &[]);
        assert!(matches!(result, Err(Error::EmptyExport)));
    }
}
