//! Excel生成（共通ライブラリ）
//!
//! シート構成:
//! - Results: 元の列 + winning_score + niche_category
//! - Niches: トップニッチの集計
//! - Recommendations: 推奨事項

use crate::aggregator::NicheStats;
use crate::csv_io::{export_headers, NICHE_COLUMN, SCORE_COLUMN};
use crate::error::{Error, Result};
use crate::recommend::Recommendation;
use crate::types::ScoredRow;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};

const NICHE_HEADERS: [&str; 6] = [
    "Niche",
    "Items",
    "Avg Score",
    "Max Score",
    "Top Performers",
    "Opportunity",
];

const RECOMMENDATION_HEADERS: [&str; 3] = ["Title", "Description", "Examples"];

fn xlsx_err(context: &str) -> impl Fn(rust_xlsxwriter::XlsxError) -> Error + '_ {
    move |e| Error::Excel(format!("{}: {}", context, e))
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0x333333))
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA))
}

fn write_header_row(sheet: &mut Worksheet, headers: &[&str], format: &Format) -> Result<()> {
    for (col, title) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *title, format)
            .map_err(xlsx_err("ヘッダー書き込みエラー"))?;
    }
    sheet
        .set_freeze_panes(1, 0)
        .map_err(xlsx_err("ウィンドウ枠固定エラー"))?;
    Ok(())
}

fn write_results(sheet: &mut Worksheet, headers: &[String], rows: &[ScoredRow], format: &Format) -> Result<()> {
    sheet.set_name("Results").map_err(xlsx_err("シート名設定エラー"))?;

    let columns = export_headers(headers);
    let titles: Vec<&str> = columns.iter().map(String::as_str).collect();
    write_header_row(sheet, &titles, format)?;

    for (i, item) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        for (col, column) in columns.iter().enumerate() {
            let col = col as u16;
            let written = match column.as_str() {
                SCORE_COLUMN => sheet.write_number(row, col, f64::from(item.winning_score())),
                NICHE_COLUMN => sheet.write_string(row, col, item.niche_category()),
                other => sheet.write_string(row, col, item.get(other).unwrap_or("")),
            };
            written.map_err(xlsx_err("セル書き込みエラー"))?;
        }
    }
    Ok(())
}

fn write_niches(sheet: &mut Worksheet, niches: &[NicheStats], format: &Format) -> Result<()> {
    sheet.set_name("Niches").map_err(xlsx_err("シート名設定エラー"))?;
    write_header_row(sheet, &NICHE_HEADERS, format)?;
    sheet
        .set_column_width(0, 18)
        .map_err(xlsx_err("列幅設定エラー"))?;

    for (i, niche) in niches.iter().enumerate() {
        let row = i as u32 + 1;
        sheet
            .write_string(row, 0, &niche.niche)
            .and_then(|s| s.write_number(row, 1, niche.count as f64))
            .and_then(|s| s.write_number(row, 2, (niche.avg_score * 10.0).round() / 10.0))
            .and_then(|s| s.write_number(row, 3, f64::from(niche.max_score)))
            .and_then(|s| s.write_number(row, 4, niche.top_performers as f64))
            .and_then(|s| s.write_number(row, 5, f64::from(niche.opportunity_score)))
            .map_err(xlsx_err("ニッチ書き込みエラー"))?;
    }
    Ok(())
}

fn write_recommendations(sheet: &mut Worksheet, recommendations: &[Recommendation], format: &Format) -> Result<()> {
    sheet
        .set_name("Recommendations")
        .map_err(xlsx_err("シート名設定エラー"))?;
    write_header_row(sheet, &RECOMMENDATION_HEADERS, format)?;
    sheet
        .set_column_width(0, 32)
        .and_then(|s| s.set_column_width(1, 80))
        .and_then(|s| s.set_column_width(2, 48))
        .map_err(xlsx_err("列幅設定エラー"))?;

    let wrap = Format::new().set_text_wrap();
    for (i, rec) in recommendations.iter().enumerate() {
        let row = i as u32 + 1;
        let examples = rec.examples.as_ref().map(|e| e.join(", ")).unwrap_or_default();
        sheet
            .write_string(row, 0, format!("{} {}", rec.icon, rec.title))
            .and_then(|s| s.write_string_with_format(row, 1, &rec.description, &wrap))
            .and_then(|s| s.write_string_with_format(row, 2, &examples, &wrap))
            .map_err(xlsx_err("推奨書き込みエラー"))?;
    }
    Ok(())
}

/// Excelをバッファに生成
///
/// # Arguments
/// * `headers` - 元CSVのヘッダー
/// * `rows` - 出力する行（スコア降順）
/// * `niches` - トップニッチ
/// * `recommendations` - 推奨事項
pub fn generate_excel_buffer(
    headers: &[String],
    rows: &[ScoredRow],
    niches: &[NicheStats],
    recommendations: &[Recommendation],
) -> Result<Vec<u8>> {
    if rows.is_empty() {
        return Err(Error::EmptyExport);
    }

    let mut workbook = Workbook::new();
    let format = header_format();

    write_results(workbook.add_worksheet(), headers, rows, &format)?;
    write_niches(workbook.add_worksheet(), niches, &format)?;
    write_recommendations(workbook.add_worksheet(), recommendations, &format)?;

    tracing::debug!(rows = rows.len(), niches = niches.len(), "Excel生成");
    workbook.save_to_buffer().map_err(xlsx_err("Excel保存エラー"))
}
