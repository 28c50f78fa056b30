//! CSV出力（CLI版）

use crate::error::{NicheError, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tshirt_niche_common::{write_scored, ScoredRow};

pub fn generate_csv(headers: &[String], rows: &[ScoredRow], output_path: &Path) -> Result<()> {
    if rows.is_empty() {
        return Err(NicheError::EmptyExport);
    }

    let file = File::create(output_path)?;
    write_scored(BufWriter::new(file), headers, rows)
        .map_err(|e| NicheError::CsvExport(e.to_string()))?;

    tracing::info!(path = %output_path.display(), rows = rows.len(), "CSV出力");
    Ok(())
}
